//! Floating point tolerance and summation helpers.

/// Absolute tolerance within which a distribution counts as normalized.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-5;

/// Compare two floats within an absolute tolerance. NaN never compares equal.
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() <= tol
}

/// Compensated (Neumaier) summation.
///
/// Used wherever a total is recomputed from scratch, so that long runs of
/// small masses next to a dominant one do not lose precision.
pub fn stable_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut compensation = 0.0;
    for v in values {
        let t = sum + v;
        if sum.abs() >= v.abs() {
            compensation += (sum - t) + v;
        } else {
            compensation += (v - t) + sum;
        }
        sum = t;
    }
    sum + compensation
}

/// Whether a total mass is within [`NORMALIZATION_TOLERANCE`] of one.
pub fn is_unit_mass(total: f64) -> bool {
    approx_eq(total, 1.0, NORMALIZATION_TOLERANCE)
}
