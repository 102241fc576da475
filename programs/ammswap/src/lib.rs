//! Ammswap - constant-product token swap module
//!
//! Pools pair two fungible tokens; liquidity providers deposit both sides and
//! receive pool-share tokens, traders swap one token for another along a route
//! of one or more pools. Pricing is exact 18-decimal fixed point with the fee
//! taken from the input side (see [`amm_model`]).
//!
//! The module holds no globals: every host capability (bank, token registry,
//! parameters, clock, store) is injected into the [`Keeper`] at construction.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod handler;
pub mod host;
pub mod keeper;
pub mod memory;
pub mod store;
pub mod types;

pub use config::{EngineConfig, DEFAULT_MAX_ROUTE_HOPS};
pub use error::{ExistingRecord, SwapError};
pub use handler::{Handler, TxResponse};
pub use host::{Bank, BankError, Checkpoint, Clock, EventSink, KvStore, ParamSource, TokenRegistry};
pub use keeper::Keeper;
pub use types::*;

pub use amm_model::Dec;

/// Module name, also the name of the pool custody account
pub const MODULE_NAME: &str = "ammswap";

/// Prefix of every pool-share token denomination
pub const POOL_TOKEN_PREFIX: &str = "ammswap_";
