//! Capabilities the host ledger provides to the swap module
//!
//! Each collaborator is a narrow trait so the engine can be driven by the
//! real ledger or by the in-memory host in [`crate::memory`].

use amm_model::Dec;
use thiserror::Error;

use crate::types::{AccAddress, DecCoin, Event, Params};

/// Failures reported by the bank collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("{address} holds {available} but needs {required}")]
    InsufficientFunds {
        address: AccAddress,
        required: DecCoin,
        available: Dec,
    },
    #[error("balance overflow")]
    Overflow,
}

/// Coin custody: account balances and the module's pool custody account
pub trait Bank {
    fn balance_of(&self, owner: &AccAddress, denom: &str) -> Dec;

    /// Move coins from `from` into pool custody
    fn transfer_to_pool(&mut self, from: &AccAddress, coins: &[DecCoin]) -> Result<(), BankError>;

    /// Move coins from pool custody to `to`
    fn transfer_from_pool(&mut self, to: &AccAddress, coins: &[DecCoin]) -> Result<(), BankError>;

    /// Credit newly issued pool-share tokens
    fn mint_shares(&mut self, coin: &DecCoin, to: &AccAddress) -> Result<(), BankError>;

    /// Debit and destroy pool-share tokens
    fn burn_shares(&mut self, coin: &DecCoin, from: &AccAddress) -> Result<(), BankError>;
}

/// Registry of issued tokens
pub trait TokenRegistry {
    fn token_exists(&self, denom: &str) -> bool;
    fn token_owner(&self, denom: &str) -> Option<AccAddress>;
}

/// Consensus parameters for this module
pub trait ParamSource {
    fn params(&self) -> Params;

    fn current_fee_rate(&self) -> Dec {
        self.params().fee_rate
    }
}

/// Block time source
pub trait Clock {
    /// Unix timestamp (seconds) of the block being executed
    fn block_time(&self) -> i64;
}

/// Fire-and-forget event output
pub trait EventSink {
    fn emit(&mut self, event: Event);
}

/// Ordered key-value store
pub trait KvStore {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;
    fn set(&mut self, key: &[u8], value: Vec<u8>);
    fn delete(&mut self, key: &[u8]);

    /// All entries whose key starts with `prefix`, in ascending key order
    fn prefix_iter(&self, prefix: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)>;

    fn has(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }
}

/// All-or-nothing transaction boundary
///
/// `begin` opens a transaction; `commit` keeps every write since, `rollback`
/// discards them.
pub trait Checkpoint {
    fn begin(&mut self);
    fn commit(&mut self);
    fn rollback(&mut self);
}
