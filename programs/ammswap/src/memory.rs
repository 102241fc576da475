//! In-memory host: reference implementations of every capability
//!
//! Used by the tests and by the CLI simulator. All state lives in ordered
//! maps so iteration, snapshots and serialized ledgers are deterministic.

use std::collections::BTreeMap;

use amm_model::Dec;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::handler::Handler;
use crate::host::{
    Bank, BankError, Checkpoint, Clock, EventSink, KvStore, ParamSource, TokenRegistry,
};
use crate::keeper::Keeper;
use crate::types::{AccAddress, DecCoin, Event, Params};
use crate::MODULE_NAME;

pub type MemoryKeeper = Keeper<MemStore, MemBank, MemTokenRegistry, StaticParams, FixedClock>;
pub type MemoryHandler =
    Handler<MemStore, MemBank, MemTokenRegistry, StaticParams, FixedClock, EventLog>;

/// Keeper over a fresh in-memory ledger at `block_time`
pub fn memory_keeper(config: EngineConfig, block_time: i64) -> MemoryKeeper {
    let params = StaticParams(config.default_params);
    Keeper::new(
        MemStore::new(),
        MemBank::new(),
        MemTokenRegistry::new(),
        params,
        FixedClock::new(block_time),
        config,
    )
}

pub fn memory_handler(config: EngineConfig, block_time: i64) -> MemoryHandler {
    Handler::new(memory_keeper(config, block_time), EventLog::default())
}

// -------------------------------------------------------------------------
// Store
// -------------------------------------------------------------------------

type Entries = BTreeMap<Vec<u8>, Vec<u8>>;

#[derive(Debug, Clone, Default)]
pub struct MemStore {
    entries: Entries,
    checkpoints: Vec<Entries>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (Vec<u8>, Vec<u8>)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            checkpoints: Vec::new(),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&Vec<u8>, &Vec<u8>)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemStore {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &[u8], value: Vec<u8>) {
        self.entries.insert(key.to_vec(), value);
    }

    fn delete(&mut self, key: &[u8]) {
        self.entries.remove(key);
    }

    fn prefix_iter(&self, prefix: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)> {
        self.entries
            .range(prefix.to_vec()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl Checkpoint for MemStore {
    fn begin(&mut self) {
        self.checkpoints.push(self.entries.clone());
    }

    fn commit(&mut self) {
        self.checkpoints.pop();
    }

    fn rollback(&mut self) {
        if let Some(saved) = self.checkpoints.pop() {
            self.entries = saved;
        }
    }
}

// -------------------------------------------------------------------------
// Bank
// -------------------------------------------------------------------------

type Balances = BTreeMap<AccAddress, BTreeMap<String, Dec>>;

/// Account balances, including the pool custody account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemBank {
    balances: Balances,
    #[serde(skip)]
    checkpoints: Vec<Balances>,
}

impl MemBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account holding every pool's reserves
    pub fn custody() -> AccAddress {
        AccAddress::module(MODULE_NAME)
    }

    /// Create coins in `owner`'s account
    pub fn credit(&mut self, owner: &AccAddress, coin: &DecCoin) -> Result<(), BankError> {
        let balance = self
            .balances
            .entry(owner.clone())
            .or_default()
            .entry(coin.denom.clone())
            .or_insert(Dec::ZERO);
        *balance = balance.checked_add(coin.amount).map_err(|_| BankError::Overflow)?;
        Ok(())
    }

    /// Destroy coins held by `owner`
    pub fn debit(&mut self, owner: &AccAddress, coin: &DecCoin) -> Result<(), BankError> {
        let available = self.balance_of(owner, &coin.denom);
        let remaining = available
            .checked_sub(coin.amount)
            .map_err(|_| BankError::InsufficientFunds {
                address: owner.clone(),
                required: coin.clone(),
                available,
            })?;

        if let Some(account) = self.balances.get_mut(owner) {
            if remaining.is_zero() {
                account.remove(&coin.denom);
            } else {
                account.insert(coin.denom.clone(), remaining);
            }
            if account.is_empty() {
                self.balances.remove(owner);
            }
        }
        Ok(())
    }

    /// Every positive balance of `owner`, ordered by denomination
    pub fn balances(&self, owner: &AccAddress) -> Vec<DecCoin> {
        self.balances
            .get(owner)
            .map(|account| {
                account
                    .iter()
                    .map(|(denom, amount)| DecCoin::new(denom.clone(), *amount))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Sum of `denom` across every account
    pub fn supply_of(&self, denom: &str) -> Dec {
        self.balances
            .values()
            .filter_map(|account| account.get(denom))
            .fold(Dec::ZERO, |acc, amount| acc.checked_add(*amount).unwrap_or(acc))
    }

    pub fn accounts(&self) -> impl Iterator<Item = &AccAddress> {
        self.balances.keys()
    }

    fn transfer(
        &mut self,
        from: &AccAddress,
        to: &AccAddress,
        coins: &[DecCoin],
    ) -> Result<(), BankError> {
        let saved = self.balances.clone();
        let result = coins.iter().try_for_each(|coin| {
            self.debit(from, coin)?;
            self.credit(to, coin)
        });
        if result.is_err() {
            self.balances = saved;
        }
        result
    }
}

impl Bank for MemBank {
    fn balance_of(&self, owner: &AccAddress, denom: &str) -> Dec {
        self.balances
            .get(owner)
            .and_then(|account| account.get(denom))
            .copied()
            .unwrap_or(Dec::ZERO)
    }

    fn transfer_to_pool(&mut self, from: &AccAddress, coins: &[DecCoin]) -> Result<(), BankError> {
        self.transfer(from, &Self::custody(), coins)
    }

    fn transfer_from_pool(&mut self, to: &AccAddress, coins: &[DecCoin]) -> Result<(), BankError> {
        self.transfer(&Self::custody(), to, coins)
    }

    fn mint_shares(&mut self, coin: &DecCoin, to: &AccAddress) -> Result<(), BankError> {
        self.credit(to, coin)
    }

    fn burn_shares(&mut self, coin: &DecCoin, from: &AccAddress) -> Result<(), BankError> {
        self.debit(from, coin)
    }
}

impl Checkpoint for MemBank {
    fn begin(&mut self) {
        self.checkpoints.push(self.balances.clone());
    }

    fn commit(&mut self) {
        self.checkpoints.pop();
    }

    fn rollback(&mut self) {
        if let Some(saved) = self.checkpoints.pop() {
            self.balances = saved;
        }
    }
}

// -------------------------------------------------------------------------
// Token registry, params, clock, events
// -------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub owner: AccAddress,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemTokenRegistry {
    tokens: BTreeMap<String, TokenInfo>,
}

impl MemTokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `denom`; returns false if it was already issued
    pub fn issue(&mut self, denom: &str, owner: &AccAddress, description: &str) -> bool {
        if self.tokens.contains_key(denom) {
            return false;
        }
        self.tokens.insert(
            denom.to_string(),
            TokenInfo {
                owner: owner.clone(),
                description: description.to_string(),
            },
        );
        true
    }

    pub fn tokens(&self) -> impl Iterator<Item = (&String, &TokenInfo)> {
        self.tokens.iter()
    }
}

impl TokenRegistry for MemTokenRegistry {
    fn token_exists(&self, denom: &str) -> bool {
        self.tokens.contains_key(denom)
    }

    fn token_owner(&self, denom: &str) -> Option<AccAddress> {
        self.tokens.get(denom).map(|t| t.owner.clone())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticParams(pub Params);

impl ParamSource for StaticParams {
    fn params(&self) -> Params {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedClock {
    time: i64,
}

impl FixedClock {
    pub fn new(time: i64) -> Self {
        Self { time }
    }

    pub fn set(&mut self, time: i64) {
        self.time = time;
    }

    pub fn advance(&mut self, secs: i64) {
        self.time = self.time.saturating_add(secs);
    }
}

impl Clock for FixedClock {
    fn block_time(&self) -> i64 {
        self.time
    }
}

/// Event sink that keeps everything it receives
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    pub events: Vec<Event>,
}

impl EventSink for EventLog {
    fn emit(&mut self, event: Event) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(denom: &str, amount: u64) -> DecCoin {
        DecCoin::new(denom, Dec::from_int(amount))
    }

    #[test]
    fn test_prefix_iter_is_bounded() {
        let mut store = MemStore::new();
        store.set(&[0x01, b'a'], vec![1]);
        store.set(&[0x01, b'b'], vec![2]);
        store.set(&[0x02, b'a'], vec![3]);
        let hits = store.prefix_iter(&[0x01]);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1].1, vec![2]);
    }

    #[test]
    fn test_store_rollback() {
        let mut store = MemStore::new();
        store.set(b"k", vec![1]);
        store.begin();
        store.set(b"k", vec![2]);
        store.delete(b"k");
        store.rollback();
        assert_eq!(store.get(b"k"), Some(vec![1]));
    }

    #[test]
    fn test_transfer_is_all_or_nothing() {
        let alice = AccAddress::new("alice");
        let mut bank = MemBank::new();
        bank.credit(&alice, &coin("atom", 10)).unwrap();
        bank.credit(&alice, &coin("btc", 1)).unwrap();

        let err = bank
            .transfer_to_pool(&alice, &[coin("atom", 5), coin("btc", 2)])
            .unwrap_err();
        assert!(matches!(err, BankError::InsufficientFunds { .. }));
        assert_eq!(bank.balance_of(&alice, "atom"), Dec::from_int(10));
        assert_eq!(bank.balance_of(&MemBank::custody(), "atom"), Dec::ZERO);

        bank.transfer_to_pool(&alice, &[coin("atom", 5)]).unwrap();
        assert_eq!(bank.balance_of(&MemBank::custody(), "atom"), Dec::from_int(5));
        assert_eq!(bank.supply_of("atom"), Dec::from_int(10));
    }

    #[test]
    fn test_bank_checkpoint() {
        let alice = AccAddress::new("alice");
        let mut bank = MemBank::new();
        bank.begin();
        bank.credit(&alice, &coin("atom", 3)).unwrap();
        bank.commit();
        bank.begin();
        bank.debit(&alice, &coin("atom", 3)).unwrap();
        bank.rollback();
        assert_eq!(bank.balances(&alice), vec![coin("atom", 3)]);
    }

    #[test]
    fn test_issue_once() {
        let mut tokens = MemTokenRegistry::new();
        let owner = AccAddress::new("alice");
        assert!(tokens.issue("atom", &owner, "Atom"));
        assert!(!tokens.issue("atom", &owner, "again"));
        assert_eq!(tokens.token_owner("atom"), Some(owner));
    }
}
