//! Prior generators over bounded integer ranges.
//!
//! Each generator returns an unnormalized [`Pmf`]; normalization happens when
//! the prior is wrapped into a suite.

use serde::{Deserialize, Serialize};
use tb_common::{Error, Result};

use super::pmf::Pmf;

/// Inclusive integer range `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bound {
    low: i64,
    high: i64,
}

impl Bound {
    pub fn new(low: i64, high: i64) -> Result<Self> {
        if low > high {
            return Err(Error::InvalidBound { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    /// Number of integers in the range.
    pub fn len(&self) -> i64 {
        self.high - self.low + 1
    }

    /// Always false; a bound holds at least one value.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn values(&self) -> impl Iterator<Item = i64> {
        self.low..=self.high
    }
}

/// Mass 1 for every value in the range.
pub fn uniform(bound: &Bound) -> Pmf<i64> {
    bound.values().map(|n| (n, 1.0)).collect()
}

/// Symmetric triangle over the range.
///
/// For a range of `L` values and `mid = L / 2`, the value at offset `i` gets
/// mass `i` below the midpoint and `L - i - 1` above it. At the midpoint the
/// mass is `i` when `L` is odd and `i - 1` when `L` is even, which keeps the
/// shape symmetric.
pub fn triangle(bound: &Bound) -> Pmf<i64> {
    let len = bound.len();
    let mid = len / 2;
    bound
        .values()
        .enumerate()
        .map(|(i, n)| {
            let i = i as i64;
            let mass = if i < mid {
                i
            } else if i > mid {
                len - i - 1
            } else if len % 2 == 0 {
                i - 1
            } else {
                i
            };
            (n, mass as f64)
        })
        .collect()
}

/// Mass `n^(-alpha)` for every value `n` in the range.
///
/// With `alpha > 0` a range containing 0 gets an infinite mass at 0, which
/// normalization and the queries reject as non-finite.
pub fn power_law(bound: &Bound, alpha: f64) -> Pmf<i64> {
    bound
        .values()
        .map(|n| (n, (n as f64).powf(-alpha)))
        .collect()
}
