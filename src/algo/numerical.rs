//! Fixed-point / digit-extraction estimators.

/// Gauss-Legendre AGM iteration. Quadratic convergence: each step roughly
/// doubles the number of correct digits, so 3-4 iterations saturate `f64`.
pub fn gauss_legendre(iterations: u64) -> f64 {
    let mut a = 1.0f64;
    let mut b = 1.0 / 2.0f64.sqrt();
    let mut t = 0.25f64;
    let mut p = 1.0f64;

    for _ in 0..iterations {
        let a_next = (a + b) / 2.0;
        let b_next = (a * b).sqrt();
        t -= p * (a - a_next) * (a - a_next);
        p *= 2.0;
        a = a_next;
        b = b_next;
    }

    let sum = a + b;
    sum * sum / (4.0 * t)
}

/// Bailey-Borwein-Plouffe base-16 series.
pub fn bbp(iterations: u64) -> f64 {
    let mut pi = 0.0f64;
    let mut power_16 = 1.0f64;
    for k in 0..iterations {
        let k8 = 8.0 * k as f64;
        let term = power_16
            * (4.0 / (k8 + 1.0) - 2.0 / (k8 + 4.0) - 1.0 / (k8 + 5.0) - 1.0 / (k8 + 6.0));
        pi += term;
        power_16 /= 16.0;
    }
    pi
}

/// Borwein's quartic iteration. Each step quadruples the number of correct
/// digits; two iterations are already past `f64` precision.
pub fn borwein(iterations: u64) -> f64 {
    let mut y = 2.0f64.sqrt() - 1.0;
    let mut a = 6.0 - 4.0 * 2.0f64.sqrt();

    for n in 0..iterations {
        let root = (1.0 - y * y * y * y).powf(0.25);
        let y_next = (1.0 - root) / (1.0 + root);
        let scale = 2.0f64.powi((2 * n + 3).min(i32::MAX as u64) as i32);
        a = a * (1.0 + y_next).powi(4) - scale * y_next * (1.0 + y_next + y_next * y_next);
        y = y_next;
    }

    1.0 / a
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn gauss_legendre_saturates_fast() {
        assert!((gauss_legendre(1) - PI).abs() < 1e-2);
        assert!((gauss_legendre(4) - PI).abs() < 1e-14);
    }

    #[test]
    fn bbp_gains_more_than_a_digit_per_term() {
        assert!((bbp(2) - PI).abs() < 1e-2);
        assert!((bbp(12) - PI).abs() < 1e-14);
    }

    #[test]
    fn borwein_saturates_in_two_steps() {
        assert!((borwein(2) - PI).abs() < 1e-14);
    }

    #[test]
    fn borwein_is_stable_for_large_iteration_counts() {
        // y underflows to zero quickly; extra iterations must not diverge.
        let estimate = borwein(50);
        assert!((estimate - PI).abs() < 1e-12, "got {estimate}");
    }

    #[test]
    fn zero_iterations_return_the_seed_values() {
        // Gauss-Legendre with zero steps is (1 + 1/sqrt(2))^2 / 1 ≈ 2.914.
        assert!((gauss_legendre(0) - 2.914).abs() < 1e-3);
        assert_eq!(bbp(0), 0.0);
    }
}
