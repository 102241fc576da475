//! Constant product AMM math (x·y=k)
//!
//! All divisions truncate toward zero. Every truncation in this module rounds
//! in the pool's favour, so the reserve product can only grow.

use primitive_types::U256;

use crate::{AmmError, Dec};

/// Result of pricing an exact-input swap against one pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapQuote {
    /// Amount of the output token paid out by the pool
    pub amount_out: Dec,

    /// Part of the input retained as protocol fee
    pub fee_amount: Dec,

    /// Input-side reserve after the trade (full input, fee included)
    pub new_reserve_in: Dec,

    /// Output-side reserve after the trade
    pub new_reserve_out: Dec,
}

/// `floor(a * b / c)` with a 256-bit intermediate product
///
/// The product of two `u128` raw values always fits in 256 bits, so the only
/// failure modes are a zero divisor and a quotient wider than 128 bits.
pub fn mul_then_div(a: Dec, b: Dec, c: Dec) -> Result<Dec, AmmError> {
    if c.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let product = U256::from(a.raw()) * U256::from(b.raw());
    let quotient = product / U256::from(c.raw());
    if quotient.bits() > 128 {
        return Err(AmmError::Overflow);
    }
    Ok(Dec::from_raw(quotient.low_u128()))
}

/// Fixed-point product `a * b`, truncated
pub fn mul_truncate(a: Dec, b: Dec) -> Result<Dec, AmmError> {
    mul_then_div(a, b, Dec::ONE)
}

/// Exact reserve product, used to check the pool invariant
pub fn reserve_product(x: Dec, y: Dec) -> U256 {
    U256::from(x.raw()) * U256::from(y.raw())
}

/// Validate a protocol fee rate
pub fn check_fee_rate(fee_rate: Dec) -> Result<(), AmmError> {
    if fee_rate >= Dec::ONE {
        return Err(AmmError::InvalidFeeRate);
    }
    Ok(())
}

/// Output amount for selling `amount_in` into a pool
///
/// - effective_in = amount_in · (1 - fee), truncated
/// - amount_out = effective_in · reserve_out / (reserve_in + effective_in)
///
/// which is `reserve_out - k / (reserve_in + effective_in)` rounded down.
/// Returns zero when the pool is unfunded or the input is too small to move
/// the output by one raw unit; callers must reject a zero result.
pub fn get_input_price(
    amount_in: Dec,
    reserve_in: Dec,
    reserve_out: Dec,
    fee_rate: Dec,
) -> Result<Dec, AmmError> {
    check_fee_rate(fee_rate)?;

    let fee_multiplier = Dec::ONE.checked_sub(fee_rate)?;
    let effective_in = mul_truncate(amount_in, fee_multiplier)?;

    if reserve_in.is_zero() || reserve_out.is_zero() || effective_in.is_zero() {
        return Ok(Dec::ZERO);
    }

    let denominator = reserve_in.checked_add(effective_in)?;
    mul_then_div(effective_in, reserve_out, denominator)
}

/// Full quote for an exact-input swap, including post-trade reserves
///
/// # Arguments
/// * `reserve_in` - Reserve of the token being sold
/// * `reserve_out` - Reserve of the token being bought
/// * `fee_rate` - Protocol fee as a fraction in `[0, 1)`
/// * `amount_in` - Amount sold
///
/// # Returns
/// * `SwapQuote` with the output amount and new reserves; `amount_out` may be
///   zero, in which case the reserves are reported unchanged by the output
pub fn quote_exact_in(
    reserve_in: Dec,
    reserve_out: Dec,
    fee_rate: Dec,
    amount_in: Dec,
) -> Result<SwapQuote, AmmError> {
    let amount_out = get_input_price(amount_in, reserve_in, reserve_out, fee_rate)?;

    let fee_multiplier = Dec::ONE.checked_sub(fee_rate)?;
    let effective_in = mul_truncate(amount_in, fee_multiplier)?;
    let fee_amount = amount_in.checked_sub(effective_in)?;

    Ok(SwapQuote {
        amount_out,
        fee_amount,
        new_reserve_in: reserve_in.checked_add(amount_in)?,
        new_reserve_out: reserve_out.checked_sub(amount_out)?,
    })
}
