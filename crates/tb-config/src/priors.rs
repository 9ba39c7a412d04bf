//! Prior specification types.
//!
//! A `PriorSpec` describes the starting distribution of a suite in a form
//! that can live in a JSON config file. Turning it into a PMF is the engine's
//! job; this module only owns the shape and its validation.

use serde::{Deserialize, Serialize};
use tb_common::{Error, Result};

fn default_beta_steps() -> usize {
    101
}

fn default_weight() -> f64 {
    1.0
}

/// Prior distribution over a hypothesis space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriorSpec {
    /// Equal mass on every integer in `[low, high]`.
    Uniform { low: i64, high: i64 },

    /// Symmetric triangle over `[low, high]`, zero at both ends.
    Triangle { low: i64, high: i64 },

    /// Mass `x^(-alpha)` on every integer in `[low, high]`.
    PowerLaw { low: i64, high: i64, alpha: f64 },

    /// Beta(alpha, beta) discretized onto `steps` evenly spaced points in [0, 1].
    Beta {
        alpha: f64,
        beta: f64,
        #[serde(default = "default_beta_steps")]
        steps: usize,
    },

    /// Hand-written hypotheses with relative weights.
    Explicit { hypotheses: Vec<WeightedHypothesis> },
}

/// One entry of an explicit prior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedHypothesis {
    pub value: f64,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl PriorSpec {
    /// Short name used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            PriorSpec::Uniform { .. } => "uniform",
            PriorSpec::Triangle { .. } => "triangle",
            PriorSpec::PowerLaw { .. } => "power_law",
            PriorSpec::Beta { .. } => "beta",
            PriorSpec::Explicit { .. } => "explicit",
        }
    }

    /// Check that the spec describes a non-empty prior with positive mass.
    pub fn validate(&self) -> Result<()> {
        match self {
            PriorSpec::Uniform { low, high } | PriorSpec::Triangle { low, high } => {
                check_range(*low, *high)?;
                if matches!(self, PriorSpec::Triangle { .. }) && high - low < 2 {
                    return Err(Error::Config(format!(
                        "triangle prior over [{low}, {high}] has no positive mass"
                    )));
                }
                Ok(())
            }
            PriorSpec::PowerLaw { low, high, alpha } => {
                check_range(*low, *high)?;
                if !alpha.is_finite() {
                    return Err(Error::Config(format!(
                        "power_law alpha must be finite, got {alpha}"
                    )));
                }
                if *low < 1 {
                    return Err(Error::Config(format!(
                        "power_law prior needs low >= 1, got {low}"
                    )));
                }
                Ok(())
            }
            PriorSpec::Beta { alpha, beta, steps } => {
                if *alpha <= 0.0 || *beta <= 0.0 || !alpha.is_finite() || !beta.is_finite() {
                    return Err(Error::Config(format!(
                        "beta prior needs positive finite parameters, got ({alpha}, {beta})"
                    )));
                }
                if *steps < 2 {
                    return Err(Error::Config(format!(
                        "beta prior needs at least 2 steps, got {steps}"
                    )));
                }
                Ok(())
            }
            PriorSpec::Explicit { hypotheses } => {
                if hypotheses.is_empty() {
                    return Err(Error::Config("explicit prior has no hypotheses".to_string()));
                }
                for h in hypotheses {
                    if !h.value.is_finite() {
                        return Err(Error::Config(format!(
                            "explicit hypothesis value must be finite, got {}",
                            h.value
                        )));
                    }
                    if h.weight < 0.0 || !h.weight.is_finite() {
                        return Err(Error::Config(format!(
                            "explicit hypothesis {} has invalid weight {}",
                            h.value, h.weight
                        )));
                    }
                }
                if hypotheses.iter().all(|h| h.weight == 0.0) {
                    return Err(Error::Config(
                        "explicit prior has zero total weight".to_string(),
                    ));
                }
                Ok(())
            }
        }
    }
}

fn check_range(low: i64, high: i64) -> Result<()> {
    if low > high {
        return Err(Error::Config(format!(
            "prior range is empty: low {low} > high {high}"
        )));
    }
    Ok(())
}
