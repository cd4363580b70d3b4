//! Compensated summation and sample means.
//!
//! The permutation tests compare means of a few dozen ambiguity values
//! tens of thousands of times. Summation here is compensated so that the
//! observed statistic and its resamples carry the same O(ε) error
//! regardless of sample order.
//!
//! # Algorithms
//!
//! - **Sum**: Neumaier's variant of Kahan compensated summation.
//! - **Mean**: compensated sum divided by the length.

/// Computes the arithmetic mean using Kahan compensated summation.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `None` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use u_fuzzy::stats::mean;
/// let v = [6.5, 4.5, 4.0, 4.5];
/// assert!((mean(&v).unwrap() - 4.875).abs() < 1e-15);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    if !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Difference of means `mean(x) − mean(y)`.
///
/// # Returns
/// - `None` if either slice is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_fuzzy::stats::mean_difference;
/// assert_eq!(mean_difference(&[3.0, 5.0], &[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mean_difference(&[], &[1.0]), None);
/// ```
pub fn mean_difference(x: &[f64], y: &[f64]) -> Option<f64> {
    Some(mean(x)? - mean(y)?)
}

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// # Algorithm
/// Maintains a running compensation variable `c`. At each step, the
/// branch ensures the smaller operand's low-order bits are captured.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *ZAMM* 54(1), pp. 39–51.
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

// ============================================================================
// Tests
// ============================================================================
