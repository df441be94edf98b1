//! Infinite-series estimators, truncated at a term count.
//!
//! The fast series (Ramanujan, Chudnovsky) update their factorial ratios
//! recursively instead of computing factorials, so a term never overflows
//! before the series has already saturated `f64` precision.

/// Leibniz-Gregory: π = 4·Σ (−1)^k / (2k+1), k = 0..terms.
pub fn leibniz(terms: u64) -> f64 {
    let mut sum = 0.0f64;
    for k in 0..terms {
        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
        sum += sign / (2 * k + 1) as f64;
    }
    4.0 * sum
}

/// Basel problem: π = sqrt(6·Σ 1/k²), k = 1..terms.
pub fn euler(terms: u64) -> f64 {
    let mut sum = 0.0f64;
    for k in 1..terms {
        sum += 1.0 / (k * k) as f64;
    }
    (6.0 * sum).sqrt()
}

/// Same series as `euler` with Kahan compensated summation, k = 1..=terms.
///
/// The compensation recovers the digits that plain summation loses once the
/// terms shrink below the running sum's ulp.
pub fn euler_kahan(terms: u64) -> f64 {
    let mut sum = 0.0f64;
    let mut compensation = 0.0f64;
    for k in 1..=terms {
        let term = 1.0 / (k * k) as f64;
        let y = term - compensation;
        let t = sum + y;
        compensation = (t - sum) - y;
        sum = t;
    }
    (6.0 * sum).sqrt()
}

/// Nilakantha: π = 3 + 4·Σ (−1)^{k+1} / ((2k)(2k+1)(2k+2)), k = 1..terms.
pub fn nilakantha(terms: u64) -> f64 {
    let mut sum = 0.0f64;
    for k in 1..terms {
        let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
        let base = (2 * k) * (2 * k + 1) * (2 * k + 2);
        sum += sign / base as f64;
    }
    3.0 + 4.0 * sum
}

/// Ramanujan's 1914 series, ~8 correct digits per term.
///
/// 1/π = (2√2 / 9801) · Σ (4k)!(1103 + 26390k) / ((k!)⁴ · 396^{4k})
pub fn ramanujan(terms: u64) -> f64 {
    if terms == 0 {
        return 0.0;
    }
    let constant_factor = 2.0 * 2.0f64.sqrt() / 9801.0;
    // k = 0 term.
    let mut sum = 1103.0f64;

    let base_396_4 = 396.0f64 * 396.0 * 396.0 * 396.0;
    // (4k)! / (k!)^4, updated recursively.
    let mut factorial_ratio = 1.0f64;
    // 1 / 396^(4k).
    let mut inv_power_396 = 1.0f64;

    for k in 1..terms {
        let kf = k as f64;
        factorial_ratio *= (4.0 * kf - 3.0) * (4.0 * kf - 2.0) * (4.0 * kf - 1.0) * (4.0 * kf);
        factorial_ratio /= kf * kf * kf * kf;
        inv_power_396 /= base_396_4;
        sum += factorial_ratio * inv_power_396 * (1103.0 + 26390.0 * kf);
    }

    1.0 / (constant_factor * sum)
}

/// Chudnovsky's series, ~14 correct digits per term.
///
/// 1/π = (12 / 640320^{3/2}) · Σ (−1)^k (6k)!(13591409 + 545140134k)
///        / ((3k)!(k!)³ · 640320^{3k})
pub fn chudnovsky(terms: u64) -> f64 {
    if terms == 0 {
        return 0.0;
    }
    let c = 426_880.0 * 10_005.0f64.sqrt();
    let base_640320_3 = 640_320.0f64 * 640_320.0 * 640_320.0;

    let mut sum = 0.0f64;
    // (6k)! / ((3k)! (k!)^3), updated recursively.
    let mut factorial_ratio = 1.0f64;
    // 1 / 640320^(3k).
    let mut inv_power = 1.0f64;
    let mut sign = 1.0f64;

    for k in 0..terms {
        if k > 0 {
            let kf = k as f64;
            factorial_ratio *= (6.0 * kf - 5.0)
                * (6.0 * kf - 4.0)
                * (6.0 * kf - 3.0)
                * (6.0 * kf - 2.0)
                * (6.0 * kf - 1.0)
                * (6.0 * kf);
            factorial_ratio /= (3.0 * kf - 2.0) * (3.0 * kf - 1.0) * (3.0 * kf) * kf * kf * kf;
            inv_power /= base_640320_3;
            sign = -sign;
        }
        sum += sign * factorial_ratio * inv_power * (13_591_409.0 + 545_140_134.0 * k as f64);
    }

    c / sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn leibniz_converges_slowly() {
        assert!((leibniz(1_000) - PI).abs() < 1e-2);
        assert!((leibniz(1_000_000) - PI).abs() < 1e-5);
    }

    #[test]
    fn euler_converges() {
        assert!((euler(10_000) - PI).abs() < 1e-3);
    }

    #[test]
    fn kahan_is_at_least_as_close_as_plain_summation() {
        let n = 5_000_000u64;
        let plain = (euler(n) - PI).abs();
        let compensated = (euler_kahan(n) - PI).abs();
        assert!(compensated <= plain * 1.01, "plain={plain}, kahan={compensated}");
    }

    #[test]
    fn nilakantha_converges_fast() {
        assert!((nilakantha(1_000) - PI).abs() < 1e-9);
    }

    #[test]
    fn ramanujan_saturates_in_a_few_terms() {
        assert!((ramanujan(1) - PI).abs() < 1e-6);
        assert!((ramanujan(3) - PI).abs() < 1e-14);
    }

    #[test]
    fn chudnovsky_saturates_in_a_few_terms() {
        assert!((chudnovsky(1) - PI).abs() < 1e-12);
        assert!((chudnovsky(3) - PI).abs() < 1e-14);
    }

    #[test]
    fn zero_terms_do_not_blow_up() {
        assert_eq!(ramanujan(0), 0.0);
        assert_eq!(chudnovsky(0), 0.0);
        assert_eq!(leibniz(0), 0.0);
    }
}
