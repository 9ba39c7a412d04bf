//! Cumulative distribution snapshot.
//!
//! A [`Cdf`] is built once from a set of masses and never changes. Input must
//! already be normalized: construction rejects empty, zero-mass and
//! unnormalized input rather than silently rescaling it.

use std::fmt::Debug;

use tb_common::{Error, Result};

use super::stable::{is_unit_mass, stable_sum};

/// Sorted keys with the cumulative probability up to and including each key.
#[derive(Debug, Clone, PartialEq)]
pub struct Cdf<K> {
    keys: Vec<K>,
    cumulative: Vec<f64>,
}

impl<K: Ord + Clone + Debug> Cdf<K> {
    /// Build a CDF from `(key, mass)` pairs in any order.
    ///
    /// Duplicate keys are merged by summing their masses.
    pub fn from_masses<I>(masses: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
    {
        let mut pairs: Vec<(K, f64)> = masses.into_iter().collect();
        if pairs.is_empty() {
            return Err(Error::EmptyDistribution);
        }

        let total = stable_sum(pairs.iter().map(|(_, m)| *m));
        if !total.is_finite() {
            return Err(Error::NonFiniteDistribution { total });
        }
        if total == 0.0 {
            return Err(Error::ZeroMassDistribution);
        }
        if !is_unit_mass(total) {
            return Err(Error::UnnormalizedDistribution { total });
        }

        pairs.sort_by(|a, b| a.0.cmp(&b.0));

        let mut keys: Vec<K> = Vec::with_capacity(pairs.len());
        let mut cumulative: Vec<f64> = Vec::with_capacity(pairs.len());
        let mut running = 0.0;
        for (key, mass) in pairs {
            running += mass;
            if keys.last() == Some(&key) {
                if let Some(last) = cumulative.last_mut() {
                    *last = running;
                }
                continue;
            }
            keys.push(key);
            cumulative.push(running);
        }

        Ok(Self { keys, cumulative })
    }

    /// Smallest key whose cumulative probability is at least `p`.
    ///
    /// `p = 0` yields the smallest key and `p = 1` the largest key.
    pub fn percentile(&self, p: f64) -> Result<K> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidPercentile(p));
        }
        let last = self.keys.len() - 1;
        if p >= 1.0 {
            return Ok(self.keys[last].clone());
        }
        let idx = self.cumulative.partition_point(|&c| c < p).min(last);
        Ok(self.keys[idx].clone())
    }

    /// Cumulative probability of the largest key not exceeding `key`.
    pub fn prob(&self, key: &K) -> f64 {
        let n = self.keys.partition_point(|k| k <= key);
        if n == 0 {
            0.0
        } else {
            self.cumulative[n - 1]
        }
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false; construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
