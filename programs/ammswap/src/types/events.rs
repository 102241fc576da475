//! Events emitted by successful operations
//!
//! Events are the audit trail: together they enumerate every amount moved,
//! minted or burned by a transition.

use serde::{Deserialize, Serialize};

use crate::MODULE_NAME;

pub const EVENT_TYPE_CREATE_EXCHANGE: &str = "create_exchange";
pub const EVENT_TYPE_ADD_LIQUIDITY: &str = "add_liquidity";
pub const EVENT_TYPE_REMOVE_LIQUIDITY: &str = "remove_liquidity";
pub const EVENT_TYPE_SWAP_TOKEN: &str = "swap_token";

pub const ATTRIBUTE_KEY_MODULE: &str = "module";
pub const ATTRIBUTE_KEY_POOL_TOKEN: &str = "pool-token";
pub const ATTRIBUTE_KEY_TOKEN_PAIR: &str = "token-pair";
pub const ATTRIBUTE_KEY_LIQUIDITY: &str = "liquidity";
pub const ATTRIBUTE_KEY_BASE_AMOUNT: &str = "base_amount";
pub const ATTRIBUTE_KEY_QUOTE_AMOUNT: &str = "quote_amount";
pub const ATTRIBUTE_KEY_SENDER: &str = "sender";
pub const ATTRIBUTE_KEY_SOLD_AMOUNT: &str = "sold_token_amount";
pub const ATTRIBUTE_KEY_BOUGHT_AMOUNT: &str = "bought_token_amount";
pub const ATTRIBUTE_KEY_RECIPIENT: &str = "recipient";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub kind: String,
    pub attributes: Vec<Attribute>,
}

impl Event {
    /// New event tagged with this module
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            attributes: vec![Attribute {
                key: ATTRIBUTE_KEY_MODULE.to_string(),
                value: MODULE_NAME.to_string(),
            }],
        }
    }

    pub fn attr(mut self, key: &str, value: impl ToString) -> Self {
        self.attributes.push(Attribute {
            key: key.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// First value recorded under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }
}

/// Collects the events of one transition in emission order
#[derive(Debug, Default)]
pub struct EventManager {
    events: Vec<Event>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}
