//! Suite of hypotheses and the Bayesian update protocol.
//!
//! A suite owns a normalized [`Pmf`] whose key set is fixed at construction.
//! Updates only rescale masses; every update call ends renormalized.
//!
//! # Batch updates
//!
//! [`Suite::multi_update`] applies a batch of observations according to the
//! suite's [`UpdatePolicy`]:
//! - observations are shuffled (default) or applied in input order,
//! - masses are renormalized once at the end, or additionally every
//!   `renormalize_every` observations.
//!
//! Shuffling uses an injected RNG ([`Suite::multi_update_with_rng`]) or a
//! `StdRng` seeded from the policy. There is no global random state.

use std::fmt::Debug;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tb_common::{Error, NumericKey, Result, Value};
use tb_config::{EngineConfig, ObservationOrder, PriorSpec, UpdatePolicy};
use tb_math::{Cdf, Pmf};
use tracing::{debug, trace, warn};

use crate::interval::credible_interval;
use crate::likelihood::Likelihood;
use crate::prior::pmf_from_spec;

/// Outcome of an update call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UpdateSummary {
    /// Number of observations applied.
    pub observations: usize,

    /// Sum of the log normalizing constants of every renormalization in the
    /// call. For a suite that was normalized beforehand this is the log
    /// marginal likelihood of the batch; `-inf` once the suite is degenerate.
    pub log_evidence: f64,

    /// Every hypothesis has zero mass after the update.
    pub degenerate: bool,
}

/// Discrete Bayesian suite over hypotheses of type `K`.
#[derive(Debug, Clone, PartialEq)]
pub struct Suite<K: Ord> {
    pmf: Pmf<K>,
    policy: UpdatePolicy,
}

impl<K: Ord + Clone + Debug> Suite<K> {
    /// Build a suite from `(hypothesis, prior mass)` pairs.
    pub fn new<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
    {
        Self::from_pmf(pairs.into_iter().collect())
    }

    /// Wrap a prior distribution, normalizing it.
    pub fn from_pmf(mut pmf: Pmf<K>) -> Result<Self> {
        if pmf.is_empty() {
            return Err(Error::EmptyDistribution);
        }
        let total = pmf.normalize();
        if !total.is_finite() {
            return Err(Error::NonFiniteDistribution { total });
        }
        if total == 0.0 {
            return Err(Error::ZeroMassDistribution);
        }
        debug!(hypotheses = pmf.len(), "suite created");
        Ok(Self {
            pmf,
            policy: UpdatePolicy::default(),
        })
    }

    /// Replace the batch update policy.
    pub fn with_policy(mut self, policy: UpdatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &UpdatePolicy {
        &self.policy
    }

    /// Update with a single observation.
    ///
    /// Every hypothesis is scaled by its likelihood, then the suite is
    /// renormalized once.
    pub fn update<L>(&mut self, observation: &L) -> UpdateSummary
    where
        L: Likelihood<K> + ?Sized,
    {
        self.pmf.scale_with(|hypo| L::likelihood(observation, hypo));
        let log_evidence = self.renormalize();
        self.summarize(1, log_evidence)
    }

    /// Update with a batch of observations using the suite's policy.
    ///
    /// When the policy has no seed a fresh OS-seeded generator is drawn for
    /// this call.
    pub fn multi_update<L>(&mut self, observations: &[L]) -> UpdateSummary
    where
        L: Likelihood<K>,
    {
        let mut rng = match self.policy.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.multi_update_with_rng(observations, &mut rng)
    }

    /// Update with a batch of observations, shuffling with `rng` when the
    /// policy asks for shuffled order.
    pub fn multi_update_with_rng<L, R>(&mut self, observations: &[L], rng: &mut R) -> UpdateSummary
    where
        L: Likelihood<K>,
        R: Rng + ?Sized,
    {
        let mut order: Vec<&L> = observations.iter().collect();
        if self.policy.order == ObservationOrder::Shuffled {
            order.shuffle(rng);
        }

        let cadence = self.policy.renormalize_every.filter(|&n| n > 0);
        let mut log_evidence = 0.0;
        let mut pending = 0usize;

        for (index, &observation) in order.iter().enumerate() {
            self.pmf.scale_with(|hypo| L::likelihood(observation, hypo));
            pending += 1;
            trace!(index, total_mass = self.pmf.total(), "observation applied");

            let last = index + 1 == order.len();
            if let Some(every) = cadence {
                if pending == every && !last {
                    log_evidence += self.renormalize();
                    pending = 0;
                }
            }
        }

        log_evidence += self.renormalize();
        self.summarize(observations.len(), log_evidence)
    }

    /// Normalize the masses and return the log of the normalizing constant.
    fn renormalize(&mut self) -> f64 {
        let sum = self.pmf.normalize();
        debug!(normalizer = sum, "suite renormalized");
        sum.ln()
    }

    fn summarize(&self, observations: usize, log_evidence: f64) -> UpdateSummary {
        let degenerate = self.is_degenerate();
        if degenerate {
            warn!(
                observations,
                hypotheses = self.pmf.len(),
                "posterior collapsed: every hypothesis has zero mass"
            );
        }
        UpdateSummary {
            observations,
            log_evidence,
            degenerate,
        }
    }

    /// Every hypothesis has zero mass.
    pub fn is_degenerate(&self) -> bool {
        self.pmf.iter().all(|(_, mass)| mass == 0.0)
    }

    // ── Queries ────────────────────────────────────────────────────

    pub fn prob(&self, hypothesis: &K) -> f64 {
        self.pmf.prob(hypothesis)
    }

    pub fn percentile(&self, p: f64) -> Result<K> {
        self.pmf.percentile(p)
    }

    pub fn maximum_likelihood(&self) -> Result<K> {
        self.pmf.maximum_likelihood()
    }

    pub fn make_cdf(&self) -> Result<Cdf<K>> {
        self.pmf.make_cdf()
    }

    /// Central credible interval covering `length` percent of the mass.
    pub fn credible_interval(&self, length: f64) -> Result<(K, K)> {
        credible_interval(&self.pmf, length)
    }

    /// Read-only view of the current distribution.
    pub fn pmf(&self) -> &Pmf<K> {
        &self.pmf
    }

    pub fn into_pmf(self) -> Pmf<K> {
        self.pmf
    }

    pub fn hypotheses(&self) -> impl Iterator<Item = &K> + '_ {
        self.pmf.keys()
    }

    pub fn len(&self) -> usize {
        self.pmf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pmf.is_empty()
    }
}

impl<K: Ord + Clone + Debug + NumericKey> Suite<K> {
    pub fn mean(&self) -> Result<f64> {
        self.pmf.mean()
    }
}

impl Suite<Value> {
    /// Build a suite whose prior is described by `spec`.
    pub fn from_spec(spec: &PriorSpec) -> Result<Self> {
        let suite = Self::from_pmf(pmf_from_spec(spec)?)?;
        debug!(kind = spec.kind(), hypotheses = suite.len(), "suite built from prior spec");
        Ok(suite)
    }

    /// Build a suite from a configuration's prior and update policy.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let spec = config
            .prior
            .as_ref()
            .ok_or_else(|| Error::Config("configuration has no prior".to_string()))?;
        Ok(Self::from_spec(spec)?.with_policy(config.update.clone()))
    }
}
