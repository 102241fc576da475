//! Message handler - the all-or-nothing boundary around the keeper
//!
//! Every message runs inside a checkpoint on both the store and the bank.
//! Events reach the sink only after a successful commit.

use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::SwapError;
use crate::host::{Bank, Checkpoint, Clock, EventSink, KvStore, ParamSource, TokenRegistry};
use crate::keeper::Keeper;
use crate::types::{Event, EventManager, Msg};

/// Result of a delivered message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxResponse {
    pub events: Vec<Event>,
}

pub struct Handler<S, B, T, P, C, E> {
    keeper: Keeper<S, B, T, P, C>,
    sink: E,
}

impl<S, B, T, P, C, E> Handler<S, B, T, P, C, E>
where
    S: KvStore + Checkpoint,
    B: Bank + Checkpoint,
    T: TokenRegistry,
    P: ParamSource,
    C: Clock,
    E: EventSink,
{
    pub fn new(keeper: Keeper<S, B, T, P, C>, sink: E) -> Self {
        Self { keeper, sink }
    }

    pub fn keeper(&self) -> &Keeper<S, B, T, P, C> {
        &self.keeper
    }

    pub fn keeper_mut(&mut self) -> &mut Keeper<S, B, T, P, C> {
        &mut self.keeper
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    pub fn into_parts(self) -> (Keeper<S, B, T, P, C>, E) {
        (self.keeper, self.sink)
    }

    /// Validate and execute one message atomically
    pub fn deliver(&mut self, msg: &Msg) -> Result<TxResponse, SwapError> {
        debug!("delivering {}: {:?}", msg.name(), msg);

        if let Err(err) = msg.validate_basic(self.keeper.config().max_route_hops) {
            warn!("{} rejected before execution: {}", msg.name(), err);
            return Err(err);
        }

        self.keeper.store_mut().begin();
        self.keeper.bank_mut().begin();

        let mut events = EventManager::new();
        match self.dispatch(msg, &mut events) {
            Ok(()) => {
                self.keeper.store_mut().commit();
                self.keeper.bank_mut().commit();

                let events = events.into_events();
                for event in &events {
                    self.sink.emit(event.clone());
                }
                info!("{} committed with {} events", msg.name(), events.len());
                Ok(TxResponse { events })
            }
            Err(err) => {
                self.keeper.store_mut().rollback();
                self.keeper.bank_mut().rollback();

                if err.is_internal() {
                    error!("{} aborted on internal failure: {}", msg.name(), err);
                } else {
                    warn!("{} rejected: {}", msg.name(), err);
                }
                Err(err)
            }
        }
    }

    fn dispatch(&mut self, msg: &Msg, events: &mut EventManager) -> Result<(), SwapError> {
        match msg {
            Msg::CreateExchange(m) => self
                .keeper
                .create_exchange(&m.base_token_name, &m.quote_token_name, events)
                .map(|_| ()),
            Msg::AddLiquidity(m) => self.keeper.add_liquidity(m, events).map(|_| ()),
            Msg::RemoveLiquidity(m) => self.keeper.remove_liquidity(m, events).map(|_| ()),
            Msg::TokenToToken(m) => self.keeper.swap_route(m, events).map(|_| ()),
        }
    }
}
