//! Swap token pairs, pool-share tokens and denomination rules

use std::fmt;
use std::sync::OnceLock;

use amm_model::Dec;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::SwapError;
use crate::types::coin::DecCoin;
use crate::POOL_TOKEN_PREFIX;

/// Separator between the two denominations of a pair key
pub const PAIR_SEPARATOR: &str = "_";

/// The exchange pool for one unordered pair of denominations.
///
/// The base side is always the lexicographically smaller denomination.
/// Reserves are either both zero (created, never funded or fully drained)
/// or both positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapTokenPair {
    /// Quote token held by the pool
    pub quote_pooled_coin: DecCoin,
    /// Base token held by the pool
    pub base_pooled_coin: DecCoin,
    /// Denomination of the pool-share token
    pub pool_token_name: String,
}

impl SwapTokenPair {
    /// Fresh, unfunded pool
    pub fn new(base: &str, quote: &str) -> Self {
        Self {
            quote_pooled_coin: DecCoin::zero(quote),
            base_pooled_coin: DecCoin::zero(base),
            pool_token_name: pool_token_name(base, quote),
        }
    }

    pub fn token_pair_name(&self) -> String {
        pair_name(&self.base_pooled_coin.denom, &self.quote_pooled_coin.denom)
    }

    pub fn is_empty(&self) -> bool {
        self.base_pooled_coin.is_zero() && self.quote_pooled_coin.is_zero()
    }

    pub fn is_funded(&self) -> bool {
        self.base_pooled_coin.is_positive() && self.quote_pooled_coin.is_positive()
    }

    /// Reserve for `denom`, if it is one side of this pair
    pub fn reserve_of(&self, denom: &str) -> Option<Dec> {
        if denom == self.base_pooled_coin.denom {
            Some(self.base_pooled_coin.amount)
        } else if denom == self.quote_pooled_coin.denom {
            Some(self.quote_pooled_coin.amount)
        } else {
            None
        }
    }

    /// Reject a pool holding exactly one positive reserve
    pub fn check_reserves(&self) -> Result<(), SwapError> {
        if self.is_empty() || self.is_funded() {
            Ok(())
        } else {
            Err(SwapError::InternalInvariantViolation {
                reason: format!(
                    "pool {} holds a one-sided reserve: {}",
                    self.token_pair_name(),
                    self
                ),
            })
        }
    }
}

impl fmt::Display for SwapTokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "base={} quote={} pool_token={}",
            self.base_pooled_coin, self.quote_pooled_coin, self.pool_token_name
        )
    }
}

/// Metadata and supply of a pool-share token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolToken {
    pub denom: String,
    pub total_supply: Dec,
}

impl PoolToken {
    pub fn new(denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            total_supply: Dec::ZERO,
        }
    }
}

/// Canonical key for an unordered pair: smaller denom first
pub fn pair_name(token1: &str, token2: &str) -> String {
    if token1 < token2 {
        format!("{token1}{PAIR_SEPARATOR}{token2}")
    } else {
        format!("{token2}{PAIR_SEPARATOR}{token1}")
    }
}

/// Pool-share denomination for a pair
pub fn pool_token_name(token1: &str, token2: &str) -> String {
    format!("{POOL_TOKEN_PREFIX}{}", pair_name(token1, token2))
}

fn denom_regex() -> &'static Regex {
    static DENOM: OnceLock<Regex> = OnceLock::new();
    DENOM.get_or_init(|| Regex::new(r"^[a-z][a-z0-9-]{1,31}$").expect("static denom pattern"))
}

/// Check one denomination may be pooled
pub fn validate_swap_token_name(denom: &str) -> Result<(), SwapError> {
    if denom.starts_with(POOL_TOKEN_PREFIX) {
        return Err(SwapError::InvalidDenom {
            denom: denom.to_string(),
            reason: format!("pool tokens (prefix {POOL_TOKEN_PREFIX:?}) cannot be pooled"),
        });
    }
    if !denom_regex().is_match(denom) {
        return Err(SwapError::InvalidDenom {
            denom: denom.to_string(),
            reason: "malformed denomination".to_string(),
        });
    }
    Ok(())
}

/// Check a base/quote pair is well-formed and canonically ordered
pub fn validate_base_and_quote_token_name(base: &str, quote: &str) -> Result<(), SwapError> {
    if base == quote {
        return Err(SwapError::InvalidDenom {
            denom: base.to_string(),
            reason: "base and quote tokens must differ".to_string(),
        });
    }
    if base > quote {
        return Err(SwapError::InvalidDenom {
            denom: base.to_string(),
            reason: format!("base token must sort before quote token {quote:?}; swap them"),
        });
    }
    validate_swap_token_name(base)?;
    validate_swap_token_name(quote)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_name_is_unordered() {
        assert_eq!(pair_name("btc", "atom"), "atom_btc");
        assert_eq!(pair_name("atom", "btc"), "atom_btc");
        assert_eq!(pool_token_name("btc", "atom"), "ammswap_atom_btc");
    }

    #[test]
    fn test_validate_names() {
        assert!(validate_base_and_quote_token_name("atom", "btc").is_ok());
        assert!(matches!(
            validate_base_and_quote_token_name("btc", "atom"),
            Err(SwapError::InvalidDenom { .. })
        ));
        assert!(matches!(
            validate_base_and_quote_token_name("atom", "atom"),
            Err(SwapError::InvalidDenom { .. })
        ));
        assert!(validate_swap_token_name("ammswap_atom_btc").is_err());
        assert!(validate_swap_token_name("").is_err());
        assert!(validate_swap_token_name("Atom").is_err());
        assert!(validate_swap_token_name("xxb-781").is_ok());
    }

    #[test]
    fn test_reserve_invariant() {
        let mut pair = SwapTokenPair::new("atom", "btc");
        assert!(pair.check_reserves().is_ok());

        pair.base_pooled_coin.amount = Dec::ONE;
        assert!(matches!(
            pair.check_reserves(),
            Err(SwapError::InternalInvariantViolation { .. })
        ));

        pair.quote_pooled_coin.amount = Dec::ONE;
        assert!(pair.check_reserves().is_ok());
        assert_eq!(pair.reserve_of("btc"), Some(Dec::ONE));
        assert_eq!(pair.reserve_of("eth"), None);
    }
}
