//! Intents accepted by the module
//!
//! Messages are immutable and consumed once. `validate_basic` is the
//! stateless structural check run before any state is read.

use amm_model::Dec;
use serde::{Deserialize, Serialize};

use crate::error::SwapError;
use crate::types::address::AccAddress;
use crate::types::coin::DecCoin;
use crate::types::pair::{pair_name, validate_base_and_quote_token_name, validate_swap_token_name};

fn require_address(addr: &AccAddress, field: &str) -> Result<(), SwapError> {
    if addr.is_empty() {
        return Err(SwapError::InvalidInput {
            reason: format!("{field} address is empty"),
        });
    }
    Ok(())
}

fn require_positive(coin: &DecCoin, field: &str) -> Result<(), SwapError> {
    if !coin.is_positive() {
        return Err(SwapError::InvalidInput {
            reason: format!("{field} must be positive, got {coin}"),
        });
    }
    Ok(())
}

/// Create an unfunded pool for a base/quote pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateExchange {
    pub base_token_name: String,
    pub quote_token_name: String,
    pub sender: AccAddress,
}

impl MsgCreateExchange {
    pub fn new(base: impl Into<String>, quote: impl Into<String>, sender: AccAddress) -> Self {
        Self {
            base_token_name: base.into(),
            quote_token_name: quote.into(),
            sender,
        }
    }

    pub fn validate_basic(&self) -> Result<(), SwapError> {
        require_address(&self.sender, "sender")?;
        validate_base_and_quote_token_name(&self.base_token_name, &self.quote_token_name)
    }

    pub fn swap_token_pair_name(&self) -> String {
        pair_name(&self.base_token_name, &self.quote_token_name)
    }
}

/// Deposit an exact quote amount and up to `max_base_amount` of base
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgAddLiquidity {
    pub min_liquidity: Dec,
    pub max_base_amount: DecCoin,
    pub quote_amount: DecCoin,
    pub deadline: i64,
    pub sender: AccAddress,
}

impl MsgAddLiquidity {
    pub fn validate_basic(&self) -> Result<(), SwapError> {
        require_address(&self.sender, "sender")?;
        require_positive(&self.max_base_amount, "max base amount")?;
        require_positive(&self.quote_amount, "quote amount")?;
        validate_base_and_quote_token_name(&self.max_base_amount.denom, &self.quote_amount.denom)
    }

    pub fn swap_token_pair_name(&self) -> String {
        pair_name(&self.max_base_amount.denom, &self.quote_amount.denom)
    }
}

/// Burn pool shares for a proportional slice of both reserves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgRemoveLiquidity {
    pub liquidity: Dec,
    pub min_base_amount: DecCoin,
    pub min_quote_amount: DecCoin,
    pub deadline: i64,
    pub sender: AccAddress,
}

impl MsgRemoveLiquidity {
    pub fn validate_basic(&self) -> Result<(), SwapError> {
        require_address(&self.sender, "sender")?;
        if !self.liquidity.is_positive() {
            return Err(SwapError::InvalidInput {
                reason: "liquidity to remove must be positive".to_string(),
            });
        }
        validate_base_and_quote_token_name(
            &self.min_base_amount.denom,
            &self.min_quote_amount.denom,
        )
    }

    pub fn swap_token_pair_name(&self) -> String {
        pair_name(&self.min_base_amount.denom, &self.min_quote_amount.denom)
    }
}

/// Sell an exact amount, optionally through intermediate denominations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgTokenToToken {
    pub sold_token_amount: DecCoin,
    #[serde(default)]
    pub token_route: Vec<String>,
    pub min_bought_token_amount: DecCoin,
    pub deadline: i64,
    pub recipient: AccAddress,
    pub sender: AccAddress,
}

impl MsgTokenToToken {
    /// Full denomination path: sold, intermediates, bought
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.token_route.len() + 2);
        path.push(self.sold_token_amount.denom.as_str());
        path.extend(self.token_route.iter().map(String::as_str));
        path.push(self.min_bought_token_amount.denom.as_str());
        path
    }

    pub fn hop_count(&self) -> usize {
        self.token_route.len() + 1
    }

    pub fn validate_basic(&self, max_route_hops: usize) -> Result<(), SwapError> {
        require_address(&self.sender, "sender")?;
        require_address(&self.recipient, "recipient")?;
        require_positive(&self.sold_token_amount, "sold token amount")?;

        if self.sold_token_amount.denom == self.min_bought_token_amount.denom {
            return Err(SwapError::InvalidDenom {
                denom: self.sold_token_amount.denom.clone(),
                reason: "cannot swap a token for itself".to_string(),
            });
        }
        if self.hop_count() > max_route_hops {
            return Err(SwapError::InvalidInput {
                reason: format!(
                    "route has {} hops, at most {} allowed",
                    self.hop_count(),
                    max_route_hops
                ),
            });
        }

        let path = self.path();
        for denom in &path {
            validate_swap_token_name(denom)?;
        }
        for hop in path.windows(2) {
            if hop[0] == hop[1] {
                return Err(SwapError::InvalidDenom {
                    denom: hop[0].to_string(),
                    reason: "route repeats a denomination in adjacent hops".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Every intent the handler can dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Msg {
    CreateExchange(MsgCreateExchange),
    AddLiquidity(MsgAddLiquidity),
    RemoveLiquidity(MsgRemoveLiquidity),
    TokenToToken(MsgTokenToToken),
}

impl Msg {
    pub fn name(&self) -> &'static str {
        match self {
            Msg::CreateExchange(_) => "create_exchange",
            Msg::AddLiquidity(_) => "add_liquidity",
            Msg::RemoveLiquidity(_) => "remove_liquidity",
            Msg::TokenToToken(_) => "token_to_token",
        }
    }

    pub fn validate_basic(&self, max_route_hops: usize) -> Result<(), SwapError> {
        match self {
            Msg::CreateExchange(m) => m.validate_basic(),
            Msg::AddLiquidity(m) => m.validate_basic(),
            Msg::RemoveLiquidity(m) => m.validate_basic(),
            Msg::TokenToToken(m) => m.validate_basic(max_route_hops),
        }
    }
}
