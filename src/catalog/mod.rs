//! Compiled-in reference data for the algorithm catalog.
//!
//! The catalog is static by design: formulas, discovery years, and
//! convergence notes do not change at runtime. The REST API serves this data
//! under `/api/v1/formulas` and `/api/v1/algorithms`, and the TUI renders it
//! in the Algorithms and Formulas tabs.

use crate::domain::{AlgorithmKind, FormulaInfo};

/// Short one-line description, used on cards and in the algorithms endpoint.
pub fn description(kind: AlgorithmKind) -> &'static str {
    match kind {
        AlgorithmKind::MonteCarlo => {
            "Probabilistic method that estimates π by sampling random points in the unit square."
        }
        AlgorithmKind::Buffon => {
            "Estimates π from the crossing probability of needles dropped on a lined floor."
        }
        AlgorithmKind::Coprimes => {
            "Estimates π from the probability that two random integers are coprime (6/π²)."
        }
        AlgorithmKind::Leibniz => {
            "The classic alternating series 4(1 − 1/3 + 1/5 − …); simple but very slow."
        }
        AlgorithmKind::Euler => {
            "Solves the Basel problem numerically: the sum of 1/k² converges to π²/6."
        }
        AlgorithmKind::EulerKahan => {
            "The Basel series with Kahan compensated summation to recover lost low-order digits."
        }
        AlgorithmKind::Nilakantha => {
            "A 15th-century acceleration of Leibniz with cubic-denominator terms."
        }
        AlgorithmKind::Ramanujan => {
            "Ramanujan's 1914 modular-form series; roughly 8 correct digits per term."
        }
        AlgorithmKind::Chudnovsky => {
            "The record-holding series for π; roughly 14 correct digits per term."
        }
        AlgorithmKind::GaussLegendre => {
            "Arithmetic-geometric-mean iteration that doubles correct digits per step."
        }
        AlgorithmKind::Bbp => {
            "Base-16 series that can extract hexadecimal digits of π at any position."
        }
        AlgorithmKind::Borwein => {
            "Quartic iteration that quadruples correct digits per step."
        }
    }
}

/// Year the method was published or discovered.
pub fn year(kind: AlgorithmKind) -> &'static str {
    match kind {
        AlgorithmKind::MonteCarlo => "1946",
        AlgorithmKind::Buffon => "1777",
        AlgorithmKind::Coprimes => "1881",
        AlgorithmKind::Leibniz => "1676",
        AlgorithmKind::Euler => "1735",
        AlgorithmKind::EulerKahan => "1965",
        AlgorithmKind::Nilakantha => "1501",
        AlgorithmKind::Ramanujan => "1914",
        AlgorithmKind::Chudnovsky => "1988",
        AlgorithmKind::GaussLegendre => "1975",
        AlgorithmKind::Bbp => "1995",
        AlgorithmKind::Borwein => "1985",
    }
}

/// Full catalog entry for one algorithm.
pub fn formula(kind: AlgorithmKind) -> FormulaInfo {
    let (formula, deep_explanation, convergence, applications, complexity) = details(kind);
    FormulaInfo {
        id: kind.wire_name().to_string(),
        name: kind.display_name().to_string(),
        formula: formula.to_string(),
        description: description(kind).to_string(),
        deep_explanation: deep_explanation.to_string(),
        convergence: convergence.to_string(),
        applications: applications.to_string(),
        complexity: complexity.to_string(),
        year: year(kind).to_string(),
    }
}

/// All catalog entries in catalog order.
pub fn all_formulas() -> Vec<FormulaInfo> {
    AlgorithmKind::ALL.iter().map(|&kind| formula(kind)).collect()
}

fn details(
    kind: AlgorithmKind,
) -> (&'static str, &'static str, &'static str, &'static str, &'static str) {
    match kind {
        AlgorithmKind::MonteCarlo => (
            r"\pi \approx 4 \cdot \frac{N_{\text{circle}}}{N_{\text{total}}} \quad \text{where } x^2+y^2 \le 1",
            "A random point in the unit square lands inside the inscribed quarter circle \
             with probability equal to the ratio of areas, π/4. Counting hits therefore \
             estimates π directly. Accuracy improves with √n by the central limit theorem, \
             which makes the method hopeless for high precision but ideal for teaching the \
             connection between geometry, probability, and numerical computation.",
            "Probabilistic, O(1/√n): four more digits cost ten-thousand times more samples.",
            "Teaching, visualization, introductions to stochastic methods.",
            "O(n) with a large probabilistic constant.",
        ),
        AlgorithmKind::Buffon => (
            r"P(\text{cross}) = \frac{2L}{\pi d} \quad\Rightarrow\quad \pi \approx \frac{2L \cdot N}{d \cdot N_{\text{cross}}}",
            "Buffon's 1777 needle problem is the earliest known Monte Carlo experiment: a \
             needle of length L dropped on a floor ruled with lines d apart crosses a line \
             with probability 2L/(πd). Inverting the observed frequency yields π. With \
             L = d the estimator is simply 2n over the number of crossings.",
            "Probabilistic, O(1/√n), with higher variance than point-in-circle sampling.",
            "History of probability, classroom experiments.",
            "O(n) with one trigonometric evaluation per needle.",
        ),
        AlgorithmKind::Coprimes => (
            r"P(\gcd(a,b)=1) = \frac{6}{\pi^2} \quad\Rightarrow\quad \pi \approx \sqrt{\frac{6}{P_{\text{observed}}}}",
            "Two integers drawn uniformly at random are coprime with probability 6/π², a \
             result that follows from the Euler product of the Riemann zeta function at \
             s = 2. Sampling pairs and measuring the coprime fraction therefore estimates \
             π through number theory rather than geometry.",
            "Probabilistic, O(1/√n).",
            "Number-theory demonstrations, pseudo-random generator sanity checks.",
            "O(n log n): one gcd per sampled pair.",
        ),
        AlgorithmKind::Leibniz => (
            r"\pi = 4 \sum_{n=0}^{\infty} \frac{(-1)^n}{2n+1} = 4 \left(1 - \frac{1}{3} + \frac{1}{5} - \frac{1}{7} + \dots \right)",
            "The arctangent series at x = 1, known to Madhava centuries before Leibniz and \
             Gregory. It is the simplest series for π and also one of the slowest: the \
             error after n terms is roughly 1/n, so each additional digit costs ten times \
             more work. Its value today is purely pedagogical.",
            "Sublinear: error ≈ 1/n, about n/ln(10) terms per digit.",
            "Teaching alternating series and convergence acceleration.",
            "O(10^d) terms for d digits.",
        ),
        AlgorithmKind::Euler => (
            r"\frac{\pi^2}{6} = \sum_{k=1}^{\infty} \frac{1}{k^2} \quad\Rightarrow\quad \pi = \sqrt{6 \sum_{k=1}^{n} \frac{1}{k^2}}",
            "Euler's 1735 solution of the Basel problem. Truncating the sum after n terms \
             leaves an error close to 1/n, so the square root converges to π about as \
             slowly as Leibniz, but the terms are all positive, which makes the series a \
             standard test bed for floating-point summation order and error growth.",
            "Sublinear: truncation error ≈ 1/n.",
            "Numerical-analysis teaching, summation benchmarks.",
            "O(10^d) terms for d digits.",
        ),
        AlgorithmKind::EulerKahan => (
            r"\pi = \sqrt{6 \sum_{k=1}^{n} \frac{1}{k^2}} \quad \text{(compensated summation)}",
            "The same Basel series evaluated with Kahan's 1965 compensated summation. A \
             running compensation term captures the low-order bits that naive summation \
             discards once the partial sum dwarfs the terms, demonstrating that the \
             summation algorithm, not the formula, can be the precision bottleneck.",
            "Same truncation error as the plain series; rounding error reduced to O(1) ulp.",
            "Floating-point error analysis, accurate accumulation patterns.",
            "O(n) with four flops per term instead of one.",
        ),
        AlgorithmKind::Nilakantha => (
            r"\pi = 3 + 4\left(\frac{1}{2 \cdot 3 \cdot 4} - \frac{1}{4 \cdot 5 \cdot 6} + \frac{1}{6 \cdot 7 \cdot 8} - \dots\right)",
            "Described by Nilakantha Somayaji in the Tantrasamgraha around 1501. The cubic \
             denominators make the error after n terms fall like 1/n³ — dramatically \
             better than Leibniz for the same arithmetic cost, and an early example of \
             series acceleration.",
            "Polynomial: error ≈ 1/(4n³), roughly three digits per tenfold increase in terms.",
            "Teaching series acceleration; medium-precision estimates.",
            "O(10^(d/3)) terms for d digits.",
        ),
        AlgorithmKind::Ramanujan => (
            r"\frac{1}{\pi} = \frac{2\sqrt{2}}{9801} \sum_{k=0}^{\infty} \frac{(4k)! \, (1103 + 26390k)}{(k!)^4 \, 396^{4k}}",
            "Ramanujan published this series in 1914 without proof; it rests on the theory \
             of modular equations and elliptic functions, with the constants 1103 and \
             26390 arising from singular values. Each term contributes close to eight \
             correct digits, and the series was the precursor of the Chudnovsky formula.",
            "Superlinear: ~7.98 decimal digits per term.",
            "High-precision computation, historical record attempts.",
            "O(n²) for n digits with big-number arithmetic; constant-time per term at f64 precision.",
        ),
        AlgorithmKind::Chudnovsky => (
            r"\frac{1}{\pi} = \frac{12}{\sqrt{640320^3}} \sum_{k=0}^{\infty} \frac{(-1)^k (6k)! \, (13591409 + 545140134k)}{(3k)! \, (k!)^3 \, 640320^{3k}}",
            "Developed by the Chudnovsky brothers in 1988 from Ramanujan's ideas. The \
             constant 640320 is tied to the j-invariant of elliptic curves with complex \
             multiplication, which is why the series converges so violently: every term \
             adds about 14.18 decimal digits. All recent world-record computations of π \
             use this formula with binary splitting.",
            "Superlinear: ~14.18 decimal digits per term.",
            "World-record π computations, supercomputer acceptance tests.",
            "O(n (log n)³) for n digits with binary splitting.",
        ),
        AlgorithmKind::GaussLegendre => (
            r"a_{n+1} = \frac{a_n + b_n}{2}, \quad b_{n+1} = \sqrt{a_n b_n}, \quad t_{n+1} = t_n - p_n (a_n - a_{n+1})^2, \quad \pi \approx \frac{(a_n+b_n)^2}{4 t_n}",
            "Combines the arithmetic-geometric mean studied by Gauss and Legendre with the \
             complete elliptic integral. Convergence is quadratic — each iteration doubles \
             the number of correct digits — so a handful of iterations exhaust any fixed \
             precision. The cost per iteration is dominated by the square root.",
            "Quadratic: correct digits double every iteration.",
            "Arbitrary-precision libraries, hardware verification.",
            "O(M(n) log n) for n digits, where M is the multiplication cost.",
        ),
        AlgorithmKind::Bbp => (
            r"\pi = \sum_{k=0}^{\infty} \frac{1}{16^k} \left( \frac{4}{8k+1} - \frac{2}{8k+4} - \frac{1}{8k+5} - \frac{1}{8k+6} \right)",
            "Discovered in 1995 by Plouffe with Bailey and Borwein. Because the series is \
             built on powers of 1/16, modular exponentiation lets one compute the n-th \
             hexadecimal digit of π without computing any of the preceding digits — the \
             property that made the formula famous. Summed naively it still converges \
             linearly at about 1.2 decimal digits per term.",
            "Linear: ~1.2 decimal digits per term.",
            "Digit extraction, spot-checking record computations, spigot algorithms.",
            "O(n log n) to reach the n-th digit without its predecessors.",
        ),
        AlgorithmKind::Borwein => (
            r"y_{n+1} = \frac{1 - (1-y_n^4)^{1/4}}{1 + (1-y_n^4)^{1/4}}, \quad a_{n+1} = a_n (1+y_{n+1})^4 - 2^{2n+3} y_{n+1} (1 + y_{n+1} + y_{n+1}^2)",
            "One of the Borwein brothers' iterations from 1985, with quartic convergence: \
             each step multiplies the number of correct digits by four. Two iterations \
             already exceed IEEE double precision, which makes the method a stress test \
             for the fourth-root implementation rather than for the iteration count.",
            "Quartic: correct digits quadruple every iteration.",
            "Arbitrary-precision benchmarks, convergence-order demonstrations.",
            "O(M(n) log n) for n digits.",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_algorithm() {
        let formulas = all_formulas();
        assert_eq!(formulas.len(), AlgorithmKind::ALL.len());
        for (kind, info) in AlgorithmKind::ALL.iter().zip(&formulas) {
            assert_eq!(info.id, kind.wire_name());
            assert_eq!(info.name, kind.display_name());
            assert!(!info.formula.is_empty());
            assert!(!info.deep_explanation.is_empty());
            assert!(!info.convergence.is_empty());
        }
    }

    #[test]
    fn years_parse_as_numbers() {
        for kind in AlgorithmKind::ALL {
            assert!(year(kind).parse::<u32>().is_ok());
        }
    }
}
