//! Engine configuration

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SwapError;
use crate::types::Params;

/// Default cap on the number of hops in one routed swap
pub const DEFAULT_MAX_ROUTE_HOPS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Longest accepted route, counted in pools traversed
    pub max_route_hops: usize,
    /// Genesis parameters for hosts that do not supply their own
    pub default_params: Params,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_route_hops: DEFAULT_MAX_ROUTE_HOPS,
            default_params: Params::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, SwapError> {
        let config: EngineConfig = toml::from_str(s).map_err(|e| SwapError::InvalidInput {
            reason: format!("invalid engine config: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, SwapError> {
        let s = fs::read_to_string(path).map_err(|e| SwapError::InvalidInput {
            reason: format!("cannot read {}: {e}", path.display()),
        })?;
        Self::from_toml_str(&s)
    }

    pub fn validate(&self) -> Result<(), SwapError> {
        if self.max_route_hops == 0 {
            return Err(SwapError::InvalidInput {
                reason: "max_route_hops must be at least 1".to_string(),
            });
        }
        self.default_params.validate()
    }
}
