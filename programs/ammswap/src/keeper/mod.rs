//! Keeper - owns the module's state and drives every state transition
//!
//! The keeper is generic over the host capabilities it needs. It performs no
//! transaction management of its own: a failed operation may have written
//! partial state, and the caller (see [`crate::handler`]) is responsible for
//! rolling the host back.

mod liquidity;
mod querier;
mod swap;

pub use swap::price_out;

use amm_model::Dec;
use log::{debug, info};

use crate::config::EngineConfig;
use crate::error::{ExistingRecord, SwapError};
use crate::host::{Bank, Clock, KvStore, ParamSource, TokenRegistry};
use crate::store::{self, pool_token_key, swap_token_pair_key, SWAP_TOKEN_PAIR_PREFIX};
use crate::types::events::{
    ATTRIBUTE_KEY_POOL_TOKEN, ATTRIBUTE_KEY_TOKEN_PAIR, EVENT_TYPE_CREATE_EXCHANGE,
};
use crate::types::{
    pair_name, validate_base_and_quote_token_name, AccAddress, DecCoin, Event, EventManager,
    PoolToken, SwapTokenPair,
};
use crate::MODULE_NAME;

pub struct Keeper<S, B, T, P, C> {
    store: S,
    bank: B,
    tokens: T,
    params: P,
    clock: C,
    config: EngineConfig,
}

impl<S, B, T, P, C> Keeper<S, B, T, P, C>
where
    S: KvStore,
    B: Bank,
    T: TokenRegistry,
    P: ParamSource,
    C: Clock,
{
    pub fn new(store: S, bank: B, tokens: T, params: P, clock: C, config: EngineConfig) -> Self {
        Self {
            store,
            bank,
            tokens,
            params,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn bank(&self) -> &B {
        &self.bank
    }

    pub fn bank_mut(&mut self) -> &mut B {
        &mut self.bank
    }

    pub fn tokens(&self) -> &T {
        &self.tokens
    }

    pub fn tokens_mut(&mut self) -> &mut T {
        &mut self.tokens
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn params_source(&self) -> &P {
        &self.params
    }

    /// Account that holds every pool's reserves
    pub fn custody_address(&self) -> AccAddress {
        AccAddress::module(MODULE_NAME)
    }

    /// Give back the host capabilities
    pub fn into_parts(self) -> (S, B, T, P, C) {
        (self.store, self.bank, self.tokens, self.params, self.clock)
    }

    // ---------------------------------------------------------------------
    // Pool registry
    // ---------------------------------------------------------------------

    pub fn find_swap_token_pair(
        &self,
        pair_name: &str,
    ) -> Result<Option<SwapTokenPair>, SwapError> {
        self.store
            .get(&swap_token_pair_key(pair_name))
            .map(|bytes| store::decode(&bytes))
            .transpose()
    }

    pub fn get_swap_token_pair(&self, pair_name: &str) -> Result<SwapTokenPair, SwapError> {
        self.find_swap_token_pair(pair_name)?.ok_or_else(|| SwapError::UnknownPair {
            pair: pair_name.to_string(),
        })
    }

    /// Persist a pool, refusing any state with a one-sided reserve
    pub fn set_swap_token_pair(&mut self, pair: &SwapTokenPair) -> Result<(), SwapError> {
        pair.check_reserves()?;
        let bytes = store::encode(pair)?;
        self.store.set(&swap_token_pair_key(&pair.token_pair_name()), bytes);
        Ok(())
    }

    /// Every pool, ordered by pair name
    pub fn get_swap_token_pairs(&self) -> Result<Vec<SwapTokenPair>, SwapError> {
        self.store
            .prefix_iter(SWAP_TOKEN_PAIR_PREFIX)
            .iter()
            .map(|(_, bytes)| store::decode(bytes))
            .collect()
    }

    pub fn get_pool_token(&self, denom: &str) -> Result<Option<PoolToken>, SwapError> {
        self.store
            .get(&pool_token_key(denom))
            .map(|bytes| store::decode(&bytes))
            .transpose()
    }

    pub fn set_pool_token(&mut self, token: &PoolToken) -> Result<(), SwapError> {
        let bytes = store::encode(token)?;
        self.store.set(&pool_token_key(&token.denom), bytes);
        Ok(())
    }

    /// Outstanding pool shares; zero for a pool token never minted
    pub fn pool_token_supply(&self, denom: &str) -> Result<Dec, SwapError> {
        Ok(self
            .get_pool_token(denom)?
            .map(|t| t.total_supply)
            .unwrap_or(Dec::ZERO))
    }

    /// Register an unfunded pool for `base`/`quote`
    pub fn create_exchange(
        &mut self,
        base: &str,
        quote: &str,
        events: &mut EventManager,
    ) -> Result<SwapTokenPair, SwapError> {
        validate_base_and_quote_token_name(base, quote)?;

        for denom in [base, quote] {
            if !self.tokens.token_exists(denom) {
                return Err(SwapError::UnknownToken {
                    denom: denom.to_string(),
                });
            }
        }

        let name = pair_name(base, quote);
        if self.store.has(&swap_token_pair_key(&name)) {
            return Err(SwapError::AlreadyExists {
                kind: ExistingRecord::SwapTokenPair,
                name,
            });
        }

        let pair = SwapTokenPair::new(base, quote);
        if self.store.has(&pool_token_key(&pair.pool_token_name))
            || self.tokens.token_exists(&pair.pool_token_name)
        {
            return Err(SwapError::AlreadyExists {
                kind: ExistingRecord::PoolToken,
                name: pair.pool_token_name,
            });
        }

        self.set_swap_token_pair(&pair)?;
        self.set_pool_token(&PoolToken::new(pair.pool_token_name.clone()))?;

        info!("created exchange {} (pool token {})", name, pair.pool_token_name);
        events.emit(
            Event::new(EVENT_TYPE_CREATE_EXCHANGE)
                .attr(ATTRIBUTE_KEY_POOL_TOKEN, &pair.pool_token_name)
                .attr(ATTRIBUTE_KEY_TOKEN_PAIR, &name),
        );
        Ok(pair)
    }

    /// Reject an intent whose deadline lies before the current block
    pub fn check_deadline(&self, deadline: i64) -> Result<(), SwapError> {
        let block_time = self.clock.block_time();
        if deadline < block_time {
            debug!("deadline {} passed at block time {}", deadline, block_time);
            return Err(SwapError::DeadlineExceeded {
                deadline,
                block_time,
            });
        }
        Ok(())
    }

    /// Fail fast when `owner` holds less than `required`
    fn ensure_balance(&self, owner: &AccAddress, required: &DecCoin) -> Result<(), SwapError> {
        let available = self.bank.balance_of(owner, &required.denom);
        if available < required.amount {
            return Err(SwapError::InsufficientFunds {
                address: owner.clone(),
                required: required.clone(),
                available,
            });
        }
        Ok(())
    }
}
