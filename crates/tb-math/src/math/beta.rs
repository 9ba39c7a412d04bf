//! Beta conjugate prior for binomial likelihoods.
//!
//! Observing `k` successes and `f` failures turns `Beta(α, β)` into
//! `Beta(α + k, β + f)`, so coin-bias style problems can be solved without a
//! discretized hypothesis grid. [`Beta::make_pmf`] bridges back to the
//! discrete world when a grid is wanted after all.

use serde::{Deserialize, Serialize};
use tb_common::{Error, Result, Value};

use super::pmf::Pmf;

/// Beta distribution with shape parameters `alpha` and `beta`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Beta {
    alpha: f64,
    beta: f64,
}

impl Beta {
    /// Both shape parameters must be strictly positive.
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        if !(alpha > 0.0 && beta > 0.0) {
            return Err(Error::InvalidBetaParameters { alpha, beta });
        }
        Ok(Self { alpha, beta })
    }

    /// Uninformative Beta(1, 1).
    pub fn uniform() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Add observed counts to the shape parameters.
    ///
    /// Counts must be non-negative (checked in debug builds); fractional
    /// counts are allowed.
    pub fn update(&mut self, successes: f64, failures: f64) {
        debug_assert!(successes >= 0.0 && failures >= 0.0);
        self.alpha += successes;
        self.beta += failures;
    }

    /// alpha / (alpha + beta)
    pub fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    /// alpha * beta / ((alpha + beta)^2 * (alpha + beta + 1))
    pub fn variance(&self) -> f64 {
        let sum = self.alpha + self.beta;
        (self.alpha * self.beta) / (sum * sum * (sum + 1.0))
    }

    /// Mode, defined only when alpha > 1 and beta > 1.
    pub fn mode(&self) -> Option<f64> {
        if self.alpha <= 1.0 || self.beta <= 1.0 {
            None
        } else {
            Some((self.alpha - 1.0) / (self.alpha + self.beta - 2.0))
        }
    }

    /// Unnormalized density `x^(alpha-1) * (1-x)^(beta-1)`.
    ///
    /// Only useful for relative comparison between points.
    pub fn eval_pdf(&self, x: f64) -> f64 {
        x.powf(self.alpha - 1.0) * (1.0 - x).powf(self.beta - 1.0)
    }

    /// Evaluate the density at `steps` evenly spaced points in [0, 1].
    ///
    /// The result is not normalized. With `alpha < 1` (or `beta < 1`) the
    /// density is unbounded at 0 (or 1); that endpoint is evaluated half a
    /// step inward instead, so every mass stays finite.
    pub fn make_pmf(&self, steps: usize) -> Result<Pmf<Value>> {
        if steps < 2 {
            return Err(Error::InvalidStepCount(steps));
        }
        let last = (steps - 1) as f64;
        let half_step = 0.5 / last;
        Ok((0..steps)
            .map(|i| {
                let x = i as f64 / last;
                let mut density = self.eval_pdf(x);
                if !density.is_finite() {
                    let inward = if i == 0 { half_step } else { 1.0 - half_step };
                    density = self.eval_pdf(inward);
                }
                (Value(x), density)
            })
            .collect())
    }
}

impl Default for Beta {
    fn default() -> Self {
        Self::uniform()
    }
}
