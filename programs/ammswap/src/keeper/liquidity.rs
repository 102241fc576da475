//! Liquidity engine: deposit both sides for shares, burn shares for both sides

use amm_model::{mul_then_div, Dec};
use log::{debug, info};

use super::Keeper;
use crate::error::SwapError;
use crate::host::{Bank, Clock, KvStore, ParamSource, TokenRegistry};
use crate::types::events::{
    ATTRIBUTE_KEY_BASE_AMOUNT, ATTRIBUTE_KEY_LIQUIDITY, ATTRIBUTE_KEY_QUOTE_AMOUNT,
    ATTRIBUTE_KEY_SENDER, EVENT_TYPE_ADD_LIQUIDITY, EVENT_TYPE_REMOVE_LIQUIDITY,
};
use crate::types::{
    coin_sort, DecCoin, Event, EventManager, MsgAddLiquidity, MsgRemoveLiquidity, PoolToken,
    SwapTokenPair,
};

/// Shares issued to the first provider of an empty pool
pub const BOOTSTRAP_LIQUIDITY: Dec = Dec::ONE;

impl<S, B, T, P, C> Keeper<S, B, T, P, C>
where
    S: KvStore,
    B: Bank,
    T: TokenRegistry,
    P: ParamSource,
    C: Clock,
{
    /// Deposit `quote_amount` and the matching base amount; returns shares minted
    ///
    /// A pool that does not exist yet is created first. On an empty pool the
    /// whole `max_base_amount` is taken and the caller sets the price.
    pub fn add_liquidity(
        &mut self,
        msg: &MsgAddLiquidity,
        events: &mut EventManager,
    ) -> Result<Dec, SwapError> {
        self.check_deadline(msg.deadline)?;

        let base_denom = msg.max_base_amount.denom.as_str();
        let quote_denom = msg.quote_amount.denom.as_str();
        let mut pair = match self.find_swap_token_pair(&msg.swap_token_pair_name())? {
            Some(pair) => pair,
            None => {
                debug!("pool {} missing, creating it", msg.swap_token_pair_name());
                self.create_exchange(base_denom, quote_denom, events)?
            }
        };

        let supply = self.pool_token_supply(&pair.pool_token_name)?;
        let (base_amount, liquidity) = deposit_terms(&pair, supply, msg)?;

        let required_base = DecCoin::new(base_denom, base_amount);
        if base_amount > msg.max_base_amount.amount {
            return Err(SwapError::ExcessiveInput {
                required: required_base,
                max: msg.max_base_amount.clone(),
            });
        }
        if liquidity.is_zero() || liquidity < msg.min_liquidity {
            return Err(SwapError::SlippageExceeded {
                minimum: DecCoin::new(pair.pool_token_name.clone(), msg.min_liquidity),
                actual: DecCoin::new(pair.pool_token_name.clone(), liquidity),
            });
        }

        let deposit = coin_sort(vec![msg.quote_amount.clone(), required_base.clone()]);
        self.bank.transfer_to_pool(&msg.sender, &deposit)?;

        pair.base_pooled_coin = pair.base_pooled_coin.checked_add(base_amount)?;
        pair.quote_pooled_coin = pair.quote_pooled_coin.checked_add(msg.quote_amount.amount)?;
        self.set_swap_token_pair(&pair)?;

        let shares = DecCoin::new(pair.pool_token_name.clone(), liquidity);
        self.bank.mint_shares(&shares, &msg.sender)?;
        let mut pool_token = self
            .get_pool_token(&pair.pool_token_name)?
            .unwrap_or_else(|| PoolToken::new(pair.pool_token_name.clone()));
        pool_token.total_supply = pool_token.total_supply.checked_add(liquidity)?;
        self.set_pool_token(&pool_token)?;

        info!(
            "{} added {} + {} to {} for {} shares",
            msg.sender, required_base, msg.quote_amount, pair.token_pair_name(), liquidity
        );
        events.emit(
            Event::new(EVENT_TYPE_ADD_LIQUIDITY)
                .attr(ATTRIBUTE_KEY_LIQUIDITY, liquidity)
                .attr(ATTRIBUTE_KEY_BASE_AMOUNT, &required_base)
                .attr(ATTRIBUTE_KEY_QUOTE_AMOUNT, &msg.quote_amount)
                .attr(ATTRIBUTE_KEY_SENDER, &msg.sender),
        );
        Ok(liquidity)
    }

    /// Burn `liquidity` shares; returns the redeemed (base, quote)
    pub fn remove_liquidity(
        &mut self,
        msg: &MsgRemoveLiquidity,
        events: &mut EventManager,
    ) -> Result<(DecCoin, DecCoin), SwapError> {
        self.check_deadline(msg.deadline)?;

        let mut pair = self.get_swap_token_pair(&msg.swap_token_pair_name())?;
        let supply = self.pool_token_supply(&pair.pool_token_name)?;
        if msg.liquidity > supply {
            return Err(SwapError::InsufficientShares {
                requested: msg.liquidity,
                supply,
            });
        }

        let shares = DecCoin::new(pair.pool_token_name.clone(), msg.liquidity);
        self.ensure_balance(&msg.sender, &shares)?;

        let (base_out, quote_out) = redeemable(&pair, msg.liquidity, supply)?;
        if base_out.amount < msg.min_base_amount.amount {
            return Err(SwapError::SlippageExceeded {
                minimum: msg.min_base_amount.clone(),
                actual: base_out,
            });
        }
        if quote_out.amount < msg.min_quote_amount.amount {
            return Err(SwapError::SlippageExceeded {
                minimum: msg.min_quote_amount.clone(),
                actual: quote_out,
            });
        }

        let withdrawal = coin_sort(vec![base_out.clone(), quote_out.clone()]);
        self.bank.transfer_from_pool(&msg.sender, &withdrawal)?;

        pair.base_pooled_coin = pair.base_pooled_coin.checked_sub(base_out.amount)?;
        pair.quote_pooled_coin = pair.quote_pooled_coin.checked_sub(quote_out.amount)?;
        self.set_swap_token_pair(&pair)?;

        self.bank.burn_shares(&shares, &msg.sender)?;
        let mut pool_token = self
            .get_pool_token(&pair.pool_token_name)?
            .ok_or_else(|| SwapError::InternalInvariantViolation {
                reason: format!("pool token {} has no supply record", pair.pool_token_name),
            })?;
        pool_token.total_supply = pool_token.total_supply.checked_sub(msg.liquidity)?;
        self.set_pool_token(&pool_token)?;

        info!(
            "{} burned {} shares of {} for {} + {}",
            msg.sender, msg.liquidity, pair.token_pair_name(), base_out, quote_out
        );
        events.emit(
            Event::new(EVENT_TYPE_REMOVE_LIQUIDITY)
                .attr(ATTRIBUTE_KEY_LIQUIDITY, msg.liquidity)
                .attr(ATTRIBUTE_KEY_BASE_AMOUNT, &base_out)
                .attr(ATTRIBUTE_KEY_QUOTE_AMOUNT, &quote_out)
                .attr(ATTRIBUTE_KEY_SENDER, &msg.sender),
        );
        Ok((base_out, quote_out))
    }
}

/// Required base amount and shares issued for a deposit
fn deposit_terms(
    pair: &SwapTokenPair,
    supply: Dec,
    msg: &MsgAddLiquidity,
) -> Result<(Dec, Dec), SwapError> {
    if pair.is_empty() {
        return Ok((msg.max_base_amount.amount, BOOTSTRAP_LIQUIDITY));
    }
    if !pair.is_funded() {
        return Err(SwapError::InternalInvariantViolation {
            reason: format!("pool {} holds a one-sided reserve: {}", pair.token_pair_name(), pair),
        });
    }
    if supply.is_zero() {
        return Err(SwapError::InternalInvariantViolation {
            reason: format!("funded pool {} has no outstanding shares", pair.token_pair_name()),
        });
    }

    let quote_in = msg.quote_amount.amount;
    let quote_reserve = pair.quote_pooled_coin.amount;
    let base_amount = mul_then_div(quote_in, pair.base_pooled_coin.amount, quote_reserve)?;
    let liquidity = mul_then_div(quote_in, supply, quote_reserve)?;
    Ok((base_amount, liquidity))
}

/// Share of both reserves owed for `liquidity` out of `supply` shares
pub(crate) fn redeemable(
    pair: &SwapTokenPair,
    liquidity: Dec,
    supply: Dec,
) -> Result<(DecCoin, DecCoin), SwapError> {
    let base = mul_then_div(pair.base_pooled_coin.amount, liquidity, supply)?;
    let quote = mul_then_div(pair.quote_pooled_coin.amount, liquidity, supply)?;
    Ok((
        DecCoin::new(pair.base_pooled_coin.denom.clone(), base),
        DecCoin::new(pair.quote_pooled_coin.denom.clone(), quote),
    ))
}
