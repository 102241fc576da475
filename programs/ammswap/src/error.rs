//! Error taxonomy of the swap module
//!
//! User errors (bad input, stale intent, price moved) are distinct from
//! internal failures, which indicate a bug in the engine or a corrupted store
//! and must never be masked as a user-facing rejection.

use amm_model::{AmmError, Dec};
use thiserror::Error;

use crate::host::BankError;
use crate::types::{AccAddress, DecCoin};

/// What kind of record already exists when creation is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExistingRecord {
    SwapTokenPair,
    PoolToken,
}

impl std::fmt::Display for ExistingRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExistingRecord::SwapTokenPair => f.write_str("swap token pair"),
            ExistingRecord::PoolToken => f.write_str("pool token"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapError {
    #[error("block time {block_time} exceeded deadline {deadline}")]
    DeadlineExceeded { deadline: i64, block_time: i64 },

    #[error("swap token pair {pair} does not exist")]
    UnknownPair { pair: String },

    #[error("{kind} {name} already exists")]
    AlreadyExists { kind: ExistingRecord, name: String },

    #[error("required input {required} exceeds the maximum {max}")]
    ExcessiveInput { required: DecCoin, max: DecCoin },

    #[error("expected at least {minimum} but got {actual}")]
    SlippageExceeded { minimum: DecCoin, actual: DecCoin },

    #[error("sold amount {sold} is too small to buy any token")]
    InsufficientInput { sold: DecCoin },

    #[error("{address} holds {available}{} but needs {required}", .required.denom)]
    InsufficientFunds {
        address: AccAddress,
        required: DecCoin,
        available: Dec,
    },

    #[error("cannot redeem {requested} shares, total supply is {supply}")]
    InsufficientShares { requested: Dec, supply: Dec },

    #[error("invalid denomination {denom:?}: {reason}")]
    InvalidDenom { denom: String, reason: String },

    #[error("token {denom} does not exist")]
    UnknownToken { denom: String },

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] AmmError),

    #[error("storage error: {reason}")]
    Storage { reason: String },

    #[error("internal invariant violated: {reason}")]
    InternalInvariantViolation { reason: String },
}

impl SwapError {
    /// Stable result code reported by the boundary layer
    pub fn code(&self) -> u32 {
        match self {
            SwapError::DeadlineExceeded { .. } => 1,
            SwapError::UnknownPair { .. } => 2,
            SwapError::AlreadyExists { .. } => 3,
            SwapError::ExcessiveInput { .. } => 4,
            SwapError::SlippageExceeded { .. } => 5,
            SwapError::InsufficientInput { .. } => 6,
            SwapError::InsufficientFunds { .. } => 7,
            SwapError::InsufficientShares { .. } => 8,
            SwapError::InvalidDenom { .. } => 9,
            SwapError::UnknownToken { .. } => 10,
            SwapError::InvalidInput { .. } => 11,
            SwapError::Arithmetic(_) => 12,
            SwapError::Storage { .. } => 13,
            SwapError::InternalInvariantViolation { .. } => 14,
        }
    }

    /// True for failures that point at the engine or its store, not the caller
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            SwapError::Storage { .. } | SwapError::InternalInvariantViolation { .. }
        )
    }
}

impl From<BankError> for SwapError {
    fn from(err: BankError) -> Self {
        match err {
            BankError::InsufficientFunds {
                address,
                required,
                available,
            } => SwapError::InsufficientFunds {
                address,
                required,
                available,
            },
            BankError::Overflow => SwapError::Arithmetic(AmmError::Overflow),
        }
    }
}
