//! Runtime configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Result;

/// Environment variable prefix, e.g. `TASKQUEST_SEED`.
pub const ENV_PREFIX: &str = "TASKQUEST";

/// Configuration for an engine session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Save file location (None = platform data dir)
    pub save_path: Option<PathBuf>,

    /// Random seed for reproducible quest creation (None = random)
    pub seed: Option<u64>,

    /// Write the save file after every successful operation
    pub autosave: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_path: None,
            seed: None,
            autosave: true,
        }
    }
}

impl GameConfig {
    /// Load configuration from `TASKQUEST_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Load configuration from the given variables instead of the process
    /// environment.
    pub fn from_vars(vars: ::config::Map<String, String>) -> Result<Self> {
        Self::load(Some(vars))
    }

    fn load(vars: Option<::config::Map<String, String>>) -> Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .ignore_empty(true)
                    .source(vars),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
