//! Probability mass function over an ordered hypothesis space.
//!
//! A [`Pmf`] maps each hypothesis key to a non-negative mass. Masses are kept
//! in key order, which makes percentile queries and iteration deterministic.
//!
//! # Running total
//!
//! `set`, `incr` and `mult` maintain a cached total incrementally so that
//! [`Pmf::total`] is O(1). The cache is only a convenience: [`Pmf::normalize`]
//! always recomputes the sum from the current masses (compensated summation)
//! and resynchronizes the cache, so drift from many incremental updates never
//! reaches the normalized distribution.

use std::collections::BTreeMap;
use std::fmt::Debug;

use tb_common::{Error, NumericKey, Result};
use tracing::warn;

use super::cdf::Cdf;
use super::stable::stable_sum;

/// Probability mass function keyed by hypothesis.
#[derive(Debug, Clone, PartialEq)]
pub struct Pmf<K: Ord> {
    masses: BTreeMap<K, f64>,
    total: f64,
}

impl<K: Ord> Default for Pmf<K> {
    fn default() -> Self {
        Self {
            masses: BTreeMap::new(),
            total: 0.0,
        }
    }
}

impl<K: Ord + Clone + Debug> Pmf<K> {
    /// Create an empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the mass for `key`.
    ///
    /// `mass` must be non-negative; this is a caller precondition and is only
    /// checked in debug builds.
    pub fn set(&mut self, key: K, mass: f64) {
        debug_assert!(mass >= 0.0, "negative mass {mass} for {key:?}");
        let old = self.masses.insert(key, mass).unwrap_or(0.0);
        self.total += mass - old;
    }

    /// Add `mass` to the existing mass for `key`, inserting it if absent.
    pub fn incr(&mut self, key: K, mass: f64) {
        debug_assert!(mass >= 0.0, "negative mass {mass} for {key:?}");
        *self.masses.entry(key).or_insert(0.0) += mass;
        self.total += mass;
    }

    /// Multiply the mass of an existing hypothesis by `factor`.
    ///
    /// Scaling a hypothesis that is not in the distribution changes nothing.
    /// It logs a warning and returns the recoverable
    /// [`Error::UnknownHypothesis`], leaving the caller free to continue with
    /// other keys.
    pub fn mult(&mut self, key: &K, factor: f64) -> Result<()> {
        match self.masses.get_mut(key) {
            Some(mass) => {
                let old = *mass;
                *mass *= factor;
                self.total += old * (factor - 1.0);
                Ok(())
            }
            None => {
                warn!(hypothesis = ?key, "attempted to scale nonexistent hypothesis");
                Err(Error::UnknownHypothesis(format!("{key:?}")))
            }
        }
    }

    /// Multiply every mass by `factor(key)`.
    ///
    /// This is `mult` applied over the whole hypothesis space in one pass;
    /// the cached total is recomputed as part of the same pass.
    pub fn scale_with<F>(&mut self, mut factor: F)
    where
        F: FnMut(&K) -> f64,
    {
        for (key, mass) in self.masses.iter_mut() {
            *mass *= factor(key);
        }
        self.total = stable_sum(self.masses.values().copied());
    }

    /// Rescale masses so they sum to one and return the pre-normalization sum.
    ///
    /// The sum is recomputed from the current masses. If it is exactly zero
    /// every mass is set to zero and the distribution is left degenerate;
    /// callers detect this through the returned zero or through later
    /// `mean`/`percentile` failures.
    ///
    /// A non-finite sum (an infinite or NaN mass) leaves the masses untouched
    /// and is returned as is; queries then fail with
    /// [`Error::NonFiniteDistribution`].
    pub fn normalize(&mut self) -> f64 {
        let sum = stable_sum(self.masses.values().copied());
        if !sum.is_finite() {
            warn!(sum, hypotheses = self.masses.len(), "cannot normalize non-finite mass");
            self.total = sum;
            return sum;
        }
        if sum == 0.0 {
            for mass in self.masses.values_mut() {
                *mass = 0.0;
            }
            self.total = 0.0;
            return 0.0;
        }
        for mass in self.masses.values_mut() {
            *mass /= sum;
        }
        self.total = 1.0;
        sum
    }

    /// Mass of `key`, or 0 when the hypothesis is absent.
    pub fn prob(&self, key: &K) -> f64 {
        self.masses.get(key).copied().unwrap_or(0.0)
    }

    /// Cached running total of all masses.
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.masses.contains_key(key)
    }

    /// Hypotheses and masses in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> + '_ {
        self.masses.iter().map(|(k, m)| (k, *m))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.masses.keys()
    }

    /// Whether the masses, summed afresh, are within `tol` of one.
    pub fn is_normalized(&self, tol: f64) -> bool {
        let sum = stable_sum(self.masses.values().copied());
        (sum - 1.0).abs() <= tol
    }

    /// Key with the strictly greatest mass.
    ///
    /// Ties resolve to the smallest tied key; callers should not rely on
    /// tie order.
    pub fn maximum_likelihood(&self) -> Result<K> {
        if self.masses.is_empty() {
            return Err(Error::EmptyDistribution);
        }
        self.check_finite()?;
        let mut best: Option<(&K, f64)> = None;
        for (key, &mass) in &self.masses {
            let best_mass = best.map_or(0.0, |(_, m)| m);
            if mass > best_mass {
                best = Some((key, mass));
            }
        }
        best.map(|(k, _)| k.clone()).ok_or(Error::ZeroMassDistribution)
    }

    /// Fails with [`Error::NonFiniteDistribution`] if any mass is infinite
    /// or NaN.
    pub fn check_finite(&self) -> Result<()> {
        if self.masses.values().all(|m| m.is_finite()) {
            return Ok(());
        }
        Err(Error::NonFiniteDistribution {
            total: stable_sum(self.masses.values().copied()),
        })
    }

    /// Smallest key whose cumulative mass reaches `p`.
    ///
    /// Fails with `InvalidPercentile` outside [0, 1], and with the
    /// [`Cdf::from_masses`] errors when the distribution is empty, has zero
    /// mass or is not normalized.
    pub fn percentile(&self, p: f64) -> Result<K> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidPercentile(p));
        }
        self.make_cdf()?.percentile(p)
    }

    /// Snapshot the current masses as a cumulative distribution.
    pub fn make_cdf(&self) -> Result<Cdf<K>> {
        Cdf::from_masses(self.masses.iter().map(|(k, m)| (k.clone(), *m)))
    }

    /// Rekey the distribution, summing the masses of keys that collide.
    pub fn map_keys<K2, F>(&self, mut f: F) -> Pmf<K2>
    where
        K2: Ord + Clone + Debug,
        F: FnMut(&K) -> K2,
    {
        let mut out = Pmf::new();
        for (key, &mass) in &self.masses {
            out.incr(f(key), mass);
        }
        out
    }
}

impl<K: Ord + Clone + Debug + NumericKey> Pmf<K> {
    /// Mass-weighted sum of the hypothesis values.
    ///
    /// This is the mean when the distribution is normalized.
    pub fn mean(&self) -> Result<f64> {
        if self.masses.is_empty() {
            return Err(Error::EmptyDistribution);
        }
        self.check_finite()?;
        if self.masses.values().all(|&m| m == 0.0) {
            return Err(Error::ZeroMassDistribution);
        }
        let mean = stable_sum(self.masses.iter().map(|(k, &m)| k.as_f64() * m));
        if !mean.is_finite() {
            return Err(Error::NonFiniteDistribution { total: self.total });
        }
        Ok(mean)
    }
}

impl<K: Ord + Clone + Debug> FromIterator<(K, f64)> for Pmf<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut pmf = Pmf::new();
        for (key, mass) in iter {
            pmf.set(key, mass);
        }
        pmf
    }
}
