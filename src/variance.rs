//! Variance of the F-distribution.
//!
//! Closed-form second central moment of the Fisher–Snedecor (F)
//! distribution, evaluated directly in double precision. No iteration,
//! no approximation — a single arithmetic expression behind ordered
//! domain guards.

/// Variance of an F-distribution with `d1` numerator and `d2` denominator
/// degrees of freedom.
///
/// # Formula
/// ```text
/// Var[X] = 2·d2²·(d1 + d2 − 2) / (d1·(d2 − 2)²·(d2 − 4))   for d1 > 0, d2 > 4
/// ```
///
/// The variance does not exist for `d2 ≤ 4`, so those parameters (and any
/// non-positive `d1`) yield NaN rather than an error. Positive infinity in
/// either parameter is not rejected; it flows through the formula under
/// IEEE-754 arithmetic.
///
/// Reference: Johnson, Kotz & Balakrishnan (1995), *Continuous Univariate
/// Distributions*, Vol. 2, Chapter 27.
///
/// # Returns
/// - `f64::NAN` if `d1 ≤ 0`, `d2 ≤ 4`, or either parameter is NaN.
///
/// # Examples
/// ```
/// use fdist_variance::variance;
/// // Var[F(3, 5)] = 300/27 ≈ 11.111
/// assert!((variance(3.0, 5.0) - 100.0 / 9.0).abs() < 1e-10);
/// // Var[F(4, 12)] = 1.26 exactly
/// assert!((variance(4.0, 12.0) - 1.26).abs() < 1e-15);
/// // Undefined below the d2 > 4 threshold
/// assert!(variance(2.0, 4.0).is_nan());
/// ```
pub fn variance(d1: f64, d2: f64) -> f64 {
    if d1.is_nan() || d2.is_nan() || d1 <= 0.0 || d2 <= 4.0 {
        return f64::NAN;
    }
    let d2m2 = d2 - 2.0;
    (2.0 * d2 * d2 * (d1 + d2 - 2.0)) / (d1 * d2m2 * d2m2 * (d2 - 4.0))
}
