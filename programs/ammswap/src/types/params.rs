//! Module parameters

use amm_model::{math::check_fee_rate, Dec};
use serde::{Deserialize, Serialize};

use crate::error::SwapError;

/// Default protocol fee taken from the sold side (0.3%)
pub const DEFAULT_FEE_RATE: Dec = Dec::from_raw(3_000_000_000_000_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    pub fee_rate: Dec,
}

impl Params {
    pub fn validate(&self) -> Result<(), SwapError> {
        check_fee_rate(self.fee_rate).map_err(|_| SwapError::InvalidInput {
            reason: format!("fee rate {} must be below 1", self.fee_rate),
        })
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            fee_rate: DEFAULT_FEE_RATE,
        }
    }
}
