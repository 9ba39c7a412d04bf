//! Shared types for the Bayesian suite engine.
//!
//! This crate provides foundational types used across the workspace:
//! - The unified error taxonomy
//! - Hypothesis key types (ordered floats, numeric keys)
//! - Schema versioning for configuration files

pub mod error;
pub mod key;
pub mod schema;

pub use error::{Error, Result};
pub use key::{NumericKey, Value};
pub use schema::SCHEMA_VERSION;
