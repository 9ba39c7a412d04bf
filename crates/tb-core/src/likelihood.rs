//! The likelihood contract between observations and a suite.

use std::collections::BTreeMap;

/// Probability of an observation under a single hypothesis.
///
/// Implementations must return a non-negative factor. The suite does not
/// check the range; a factor of zero for every hypothesis is allowed and
/// leaves the suite degenerate.
pub trait Likelihood<K> {
    fn likelihood(&self, hypothesis: &K) -> f64;
}

impl<K, F> Likelihood<K> for F
where
    F: Fn(&K) -> f64,
{
    fn likelihood(&self, hypothesis: &K) -> f64 {
        self(hypothesis)
    }
}

/// Table of per-hypothesis likelihood factors.
///
/// Hypotheses missing from the table have likelihood zero.
#[derive(Debug, Clone, PartialEq)]
pub struct LikelihoodTable<K: Ord> {
    factors: BTreeMap<K, f64>,
}

impl<K: Ord> Default for LikelihoodTable<K> {
    fn default() -> Self {
        Self {
            factors: BTreeMap::new(),
        }
    }
}

impl<K: Ord> LikelihoodTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, hypothesis: K, factor: f64) -> Self {
        self.insert(hypothesis, factor);
        self
    }

    pub fn insert(&mut self, hypothesis: K, factor: f64) {
        self.factors.insert(hypothesis, factor);
    }

    pub fn get(&self, hypothesis: &K) -> Option<f64> {
        self.factors.get(hypothesis).copied()
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

impl<K: Ord> FromIterator<(K, f64)> for LikelihoodTable<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            factors: iter.into_iter().collect(),
        }
    }
}

impl<K: Ord> Likelihood<K> for LikelihoodTable<K> {
    fn likelihood(&self, hypothesis: &K) -> f64 {
        self.get(hypothesis).unwrap_or(0.0)
    }
}
