//! Engine configuration types.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tb_common::schema::is_compatible;
use tb_common::{Error, Result, SCHEMA_VERSION};
use tracing::Level;

use crate::priors::PriorSpec;
use crate::DEFAULT_RENORMALIZE_EVERY;

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub update: UpdatePolicy,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub prior: Option<PriorSpec>,
}

fn default_schema_version() -> String {
    SCHEMA_VERSION.to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            description: None,
            update: UpdatePolicy::default(),
            logging: LoggingConfig::default(),
            prior: None,
        }
    }
}

impl EngineConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_json(&content)
    }

    /// Parse and validate a configuration from a JSON string.
    pub fn parse_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Semantic validation beyond what the JSON shape enforces.
    pub fn validate(&self) -> Result<()> {
        if !is_compatible(&self.schema_version) {
            return Err(Error::UnsupportedSchema {
                version: self.schema_version.clone(),
            });
        }
        self.update.validate()?;
        self.logging.validate()?;
        if let Some(prior) = &self.prior {
            prior.validate()?;
        }
        Ok(())
    }
}

/// Order in which a batch of observations is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationOrder {
    /// Uniformly shuffled per batch, so that a long run of one kind of
    /// observation cannot drive other hypotheses to exact zero before the
    /// offsetting observations arrive.
    #[default]
    Shuffled,
    /// Input order.
    InOrder,
}

/// How a suite applies a batch of observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatePolicy {
    pub order: ObservationOrder,

    /// Renormalize after every N observations in addition to the final
    /// renormalization. `None` normalizes once at the end.
    pub renormalize_every: Option<usize>,

    /// Seed for the shuffle. `None` draws a fresh OS-seeded generator per
    /// batch.
    pub seed: Option<u64>,
}

impl Default for UpdatePolicy {
    fn default() -> Self {
        Self {
            order: ObservationOrder::Shuffled,
            renormalize_every: None,
            seed: None,
        }
    }
}

impl UpdatePolicy {
    /// Input order, renormalizing every [`DEFAULT_RENORMALIZE_EVERY`]
    /// observations.
    pub fn deterministic() -> Self {
        Self {
            order: ObservationOrder::InOrder,
            renormalize_every: Some(DEFAULT_RENORMALIZE_EVERY),
            seed: None,
        }
    }

    /// Shuffled order with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.renormalize_every == Some(0) {
            return Err(Error::Config(
                "update.renormalize_every must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Structured logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is not set.
    pub level: String,

    /// Emit JSON lines instead of human-readable text.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl LoggingConfig {
    pub fn level(&self) -> Option<Level> {
        self.level.parse().ok()
    }

    pub fn validate(&self) -> Result<()> {
        if self.level().is_none() {
            return Err(Error::Config(format!(
                "logging.level '{}' is not a valid level",
                self.level
            )));
        }
        Ok(())
    }
}
