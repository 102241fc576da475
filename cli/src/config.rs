//! Simulator configuration

use ammswap::EngineConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the ledger snapshot
pub const DEFAULT_STATE_PATH: &str = "ammswap-state.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Ledger snapshot file
    pub state_path: PathBuf,
    /// Deadline offset applied when a command does not pass `--deadline`
    pub default_deadline_secs: i64,
    pub engine: EngineConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from(DEFAULT_STATE_PATH),
            default_deadline_secs: 600,
            engine: EngineConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load from `path`, or fall back to defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config
            .engine
            .validate()
            .with_context(|| format!("Invalid engine settings in: {}", path.display()))?;
        Ok(config)
    }

    /// Deadline for a command issued at `block_time`
    pub fn deadline(&self, block_time: i64, explicit: Option<i64>) -> i64 {
        explicit.unwrap_or_else(|| block_time.saturating_add(self.default_deadline_secs))
    }
}
