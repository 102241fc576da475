//! Ledger snapshot persisted between CLI invocations

use ammswap::memory::{
    EventLog, FixedClock, MemBank, MemStore, MemTokenRegistry, MemoryHandler, StaticParams,
};
use ammswap::{EngineConfig, Handler, Keeper, Params};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Serialized ledger: module store (hex encoded), balances, tokens, params
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerState {
    pub params: Params,
    pub store: BTreeMap<String, String>,
    pub bank: MemBank,
    pub tokens: MemTokenRegistry,
}

impl LedgerState {
    pub fn new(params: Params) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Ledger file not found: {}\n\
                 Create one with: ammswap init",
                path.display()
            );
        }
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read ledger file: {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse ledger file: {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)
            .with_context(|| format!("Failed to write ledger file: {}", path.display()))
    }

    fn decode_store(&self) -> Result<MemStore> {
        let mut entries = Vec::with_capacity(self.store.len());
        for (key, value) in &self.store {
            let key = hex::decode(key).with_context(|| format!("Corrupt store key: {key}"))?;
            let value =
                hex::decode(value).with_context(|| format!("Corrupt store value under {key:?}"))?;
            entries.push((key, value));
        }
        Ok(MemStore::from_entries(entries))
    }

    fn encode_store(store: &MemStore) -> BTreeMap<String, String> {
        store
            .entries()
            .map(|(k, v)| (hex::encode(k), hex::encode(v)))
            .collect()
    }
}

/// An opened ledger ready to execute commands at a fixed block time
pub struct Session {
    path: PathBuf,
    pub handler: MemoryHandler,
}

impl Session {
    pub fn open(path: &Path, engine: EngineConfig, block_time: i64) -> Result<Self> {
        let state = LedgerState::load(path)?;
        let keeper = Keeper::new(
            state.decode_store()?,
            state.bank,
            state.tokens,
            StaticParams(state.params),
            FixedClock::new(block_time),
            engine,
        );
        Ok(Self {
            path: path.to_path_buf(),
            handler: Handler::new(keeper, EventLog::default()),
        })
    }

    /// Write the ledger back, dropping the session
    pub fn persist(self) -> Result<()> {
        let (keeper, _) = self.handler.into_parts();
        let (store, bank, tokens, params, _) = keeper.into_parts();
        let state = LedgerState {
            params: params.0,
            store: LedgerState::encode_store(&store),
            bank,
            tokens,
        };
        state.save(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ammswap::{AccAddress, Clock, Dec, DecCoin, Msg, MsgCreateExchange};

    #[test]
    fn test_missing_ledger_reports_init_hint() {
        let dir = tempfile::tempdir().unwrap();
        let err = LedgerState::load(&dir.path().join("none.json")).unwrap_err();
        assert!(err.to_string().contains("ammswap init"));
    }

    #[test]
    fn test_session_persists_pools_and_balances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        LedgerState::new(Params::default()).save(&path).unwrap();

        let alice = AccAddress::new("alice");
        let mut session = Session::open(&path, EngineConfig::default(), 10).unwrap();
        {
            let keeper = session.handler.keeper_mut();
            for denom in ["atom", "btc"] {
                keeper.tokens_mut().issue(denom, &alice, denom);
                keeper
                    .bank_mut()
                    .credit(&alice, &DecCoin::new(denom, Dec::from_int(5)))
                    .unwrap();
            }
        }
        session
            .handler
            .deliver(&Msg::CreateExchange(MsgCreateExchange::new("atom", "btc", alice.clone())))
            .unwrap();
        session.persist().unwrap();

        let reopened = Session::open(&path, EngineConfig::default(), 20).unwrap();
        let keeper = reopened.handler.keeper();
        assert_eq!(keeper.query_swap_token_pairs().unwrap().len(), 1);
        assert_eq!(keeper.bank().balances(&alice).len(), 2);
        assert_eq!(keeper.clock().block_time(), 20);
    }
}
