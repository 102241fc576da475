//! Denominated amounts and transfer staging

use std::fmt;
use std::str::FromStr;

use amm_model::Dec;
use serde::{Deserialize, Serialize};

use crate::error::SwapError;

/// An amount tagged with its denomination
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecCoin {
    pub denom: String,
    pub amount: Dec,
}

impl DecCoin {
    pub fn new(denom: impl Into<String>, amount: Dec) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    pub fn zero(denom: impl Into<String>) -> Self {
        Self::new(denom, Dec::ZERO)
    }

    pub fn is_positive(&self) -> bool {
        self.amount.is_positive()
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Add an amount of the same denomination
    pub fn checked_add(&self, amount: Dec) -> Result<DecCoin, SwapError> {
        Ok(DecCoin::new(self.denom.clone(), self.amount.checked_add(amount)?))
    }

    /// Subtract an amount of the same denomination
    pub fn checked_sub(&self, amount: Dec) -> Result<DecCoin, SwapError> {
        Ok(DecCoin::new(self.denom.clone(), self.amount.checked_sub(amount)?))
    }
}

impl fmt::Display for DecCoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl FromStr for DecCoin {
    type Err = SwapError;

    /// Parses `"<amount><denom>"`, e.g. `10.5atom`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or_else(|| SwapError::InvalidInput {
                reason: format!("coin {s:?} has no denomination"),
            })?;
        let (amount, denom) = s.split_at(split);
        let amount: Dec = amount.parse().map_err(|_| SwapError::InvalidInput {
            reason: format!("coin {s:?} has an invalid amount"),
        })?;
        Ok(DecCoin::new(denom, amount))
    }
}

/// Stage a transfer batch: drop non-positive entries, then order by denom.
///
/// Transfers for one operation are always executed in this canonical order
/// regardless of how the operation listed them.
pub fn coin_sort(coins: Vec<DecCoin>) -> Vec<DecCoin> {
    let mut staged: Vec<DecCoin> = coins.into_iter().filter(DecCoin::is_positive).collect();
    staged.sort_by(|a, b| a.denom.cmp(&b.denom));
    staged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coin() {
        let c: DecCoin = "10.5atom".parse().unwrap();
        assert_eq!(c.denom, "atom");
        assert_eq!(c.amount, "10.5".parse().unwrap());
        assert_eq!(c.to_string(), "10.500000000000000000atom");

        assert!("atom".parse::<DecCoin>().is_err());
        assert!("10".parse::<DecCoin>().is_err());
    }

    #[test]
    fn test_coin_sort_drops_zero_and_orders() {
        let staged = coin_sort(vec![
            DecCoin::new("usdt", Dec::from_int(5)),
            DecCoin::zero("btc"),
            DecCoin::new("atom", Dec::from_int(1)),
        ]);
        let denoms: Vec<&str> = staged.iter().map(|c| c.denom.as_str()).collect();
        assert_eq!(denoms, vec!["atom", "usdt"]);
    }

    #[test]
    fn test_coin_sort_order_independent() {
        let a = DecCoin::new("eth", Dec::from_int(2));
        let b = DecCoin::new("dai", Dec::from_int(3));
        assert_eq!(
            coin_sort(vec![a.clone(), b.clone()]),
            coin_sort(vec![b, a])
        );
    }
}
