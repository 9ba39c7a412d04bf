//! Central credible intervals.

use std::fmt::Debug;

use tb_common::{Error, Result};
use tb_math::Pmf;

/// Lower and upper percentiles of a central interval covering `length`
/// percent of the mass.
///
/// `length` must lie in (0, 100].
pub fn credible_interval_percentiles(length: f64) -> Result<(f64, f64)> {
    if length.is_nan() || length <= 0.0 || length > 100.0 {
        return Err(Error::InvalidIntervalLength(length));
    }
    let lower = (100.0 - length) / 200.0;
    Ok((lower, 1.0 - lower))
}

/// Hypotheses bounding the central `length`-percent credible interval.
///
/// Both bounds come from a single CDF snapshot, so the distribution must be
/// normalized.
pub fn credible_interval<K>(pmf: &Pmf<K>, length: f64) -> Result<(K, K)>
where
    K: Ord + Clone + Debug,
{
    let (lower, upper) = credible_interval_percentiles(length)?;
    let cdf = pmf.make_cdf()?;
    Ok((cdf.percentile(lower)?, cdf.percentile(upper)?))
}
