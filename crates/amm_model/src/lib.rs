//! AMM Model - exact fixed-point math for constant product pools (x·y=k)
//!
//! This crate holds the arithmetic every validating node must reproduce
//! bit-for-bit: the 18-decimal [`Dec`] amount type, the widened
//! multiply-then-divide primitive, and the exact-input swap quote.
//!
//! Nothing in here knows about accounts, denominations or storage. The
//! `ammswap` engine feeds reserves in and gets amounts out.

#![forbid(unsafe_code)]

pub mod dec;
pub mod math;

pub use dec::Dec;
pub use math::{get_input_price, mul_then_div, mul_truncate, quote_exact_in, SwapQuote};

/// Number of fractional decimal digits carried by [`Dec`]
pub const PRECISION: u32 = 18;

/// Raw representation of `1.0` (10^PRECISION)
pub const PRECISION_MULTIPLIER: u128 = 1_000_000_000_000_000_000;

/// Error types for AMM arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AmmError {
    /// Fee rate outside `[0, 1)`
    #[error("fee rate must be in [0, 1)")]
    InvalidFeeRate,
    /// Divisor was zero
    #[error("division by zero")]
    DivisionByZero,
    /// Result does not fit the fixed-point range
    #[error("arithmetic overflow")]
    Overflow,
    /// Subtraction would go negative
    #[error("arithmetic underflow")]
    Underflow,
    /// Text is not a valid decimal amount
    #[error("invalid decimal amount")]
    InvalidDecimal,
}
