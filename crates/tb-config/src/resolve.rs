//! Config resolution.
//!
//! Resolution order:
//! 1. Explicit path passed by the caller
//! 2. Path named by the `TB_CONFIG` environment variable
//! 3. Built-in defaults

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tb_common::Result;
use tracing::debug;

use crate::engine::EngineConfig;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "TB_CONFIG";

/// Where the resolved configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Environment(PathBuf),
    Defaults,
}

/// A validated configuration together with its origin.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: EngineConfig,
    pub source: ConfigSource,
}

/// Resolve the engine configuration from the standard locations.
///
/// A file that is named but missing or invalid is an error; there is no
/// silent fallback to defaults once a path has been given.
pub fn resolve_config(explicit: Option<&Path>) -> Result<ResolvedConfig> {
    resolve_with_env(explicit, std::env::var_os(CONFIG_ENV_VAR))
}

fn resolve_with_env(explicit: Option<&Path>, env_value: Option<OsString>) -> Result<ResolvedConfig> {
    let source = match (explicit, env_value) {
        (Some(path), _) => ConfigSource::Explicit(path.to_path_buf()),
        (None, Some(value)) if !value.is_empty() => ConfigSource::Environment(PathBuf::from(value)),
        _ => ConfigSource::Defaults,
    };

    let config = match &source {
        ConfigSource::Explicit(path) | ConfigSource::Environment(path) => {
            debug!(path = %path.display(), "loading engine config");
            EngineConfig::from_file(path)?
        }
        ConfigSource::Defaults => {
            debug!("using default engine config");
            EngineConfig::default()
        }
    };

    Ok(ResolvedConfig { config, source })
}
