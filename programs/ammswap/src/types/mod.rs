//! Ledger-facing data model

pub mod address;
pub mod coin;
pub mod events;
pub mod msgs;
pub mod pair;
pub mod params;

pub use address::AccAddress;
pub use coin::{coin_sort, DecCoin};
pub use events::{Attribute, Event, EventManager};
pub use msgs::{Msg, MsgAddLiquidity, MsgCreateExchange, MsgRemoveLiquidity, MsgTokenToToken};
pub use pair::{
    pair_name, pool_token_name, validate_base_and_quote_token_name, validate_swap_token_name,
    PoolToken, SwapTokenPair,
};
pub use params::Params;
