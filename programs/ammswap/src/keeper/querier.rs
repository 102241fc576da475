//! Read-only queries

use amm_model::Dec;

use super::liquidity::redeemable;
use super::swap::price_out;
use super::Keeper;
use crate::error::SwapError;
use crate::host::{Bank, Clock, KvStore, ParamSource, TokenRegistry};
use crate::types::{
    pair_name, validate_base_and_quote_token_name, validate_swap_token_name, DecCoin, Params,
    SwapTokenPair,
};

impl<S, B, T, P, C> Keeper<S, B, T, P, C>
where
    S: KvStore,
    B: Bank,
    T: TokenRegistry,
    P: ParamSource,
    C: Clock,
{
    pub fn query_swap_token_pair(
        &self,
        base: &str,
        quote: &str,
    ) -> Result<SwapTokenPair, SwapError> {
        validate_base_and_quote_token_name(base, quote)?;
        self.get_swap_token_pair(&pair_name(base, quote))
    }

    pub fn query_swap_token_pairs(&self) -> Result<Vec<SwapTokenPair>, SwapError> {
        self.get_swap_token_pairs()
    }

    pub fn query_params(&self) -> Params {
        self.params.params()
    }

    /// Base and quote amounts that burning `liquidity` shares would return
    pub fn query_redeemable_assets(
        &self,
        base: &str,
        quote: &str,
        liquidity: Dec,
    ) -> Result<(DecCoin, DecCoin), SwapError> {
        let pair = self.query_swap_token_pair(base, quote)?;
        let supply = self.pool_token_supply(&pair.pool_token_name)?;
        if liquidity > supply {
            return Err(SwapError::InsufficientShares {
                requested: liquidity,
                supply,
            });
        }
        if supply.is_zero() {
            return Ok((DecCoin::zero(base), DecCoin::zero(quote)));
        }
        redeemable(&pair, liquidity, supply)
    }

    /// Amount of `token_to_buy` that selling `sold` would currently return
    pub fn query_buy_amount(
        &self,
        sold: &DecCoin,
        token_to_buy: &str,
    ) -> Result<DecCoin, SwapError> {
        validate_swap_token_name(&sold.denom)?;
        validate_swap_token_name(token_to_buy)?;
        if sold.denom == token_to_buy {
            return Err(SwapError::InvalidDenom {
                denom: token_to_buy.to_string(),
                reason: "cannot price a token against itself".to_string(),
            });
        }
        let pair = self.get_swap_token_pair(&pair_name(&sold.denom, token_to_buy))?;
        price_out(&pair, sold, token_to_buy, self.params.current_fee_rate())
    }
}
