//! Bayesian suite engine configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for the engine configuration file
//! - Prior specifications (uniform, triangle, power law, beta, explicit)
//! - Config resolution (explicit path → env → defaults)
//! - Semantic validation

pub mod engine;
pub mod priors;
pub mod resolve;

pub use engine::{EngineConfig, LoggingConfig, ObservationOrder, UpdatePolicy};
pub use priors::{PriorSpec, WeightedHypothesis};
pub use resolve::{resolve_config, ConfigSource, ResolvedConfig, CONFIG_ENV_VAR};

/// Renormalize cadence used by the deterministic update policy.
pub const DEFAULT_RENORMALIZE_EVERY: usize = 10;
