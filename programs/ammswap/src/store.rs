//! Storage layout and record codec
//!
//! | key                          | value           |
//! |------------------------------|-----------------|
//! | `0x01 ++ pair_name`          | `SwapTokenPair` |
//! | `0x02 ++ pool_token_name`    | `PoolToken`     |
//!
//! Values are one version byte followed by the bincode encoding.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::SwapError;

pub const SWAP_TOKEN_PAIR_PREFIX: &[u8] = &[0x01];
pub const POOL_TOKEN_PREFIX_KEY: &[u8] = &[0x02];

/// Current record encoding version
pub const RECORD_VERSION: u8 = 1;

pub fn swap_token_pair_key(pair_name: &str) -> Vec<u8> {
    [SWAP_TOKEN_PAIR_PREFIX, pair_name.as_bytes()].concat()
}

pub fn pool_token_key(pool_token_name: &str) -> Vec<u8> {
    [POOL_TOKEN_PREFIX_KEY, pool_token_name.as_bytes()].concat()
}

pub fn encode<T: Serialize>(record: &T) -> Result<Vec<u8>, SwapError> {
    let body = bincode::serialize(record).map_err(|e| SwapError::Storage {
        reason: format!("encode failed: {e}"),
    })?;
    let mut bytes = Vec::with_capacity(body.len() + 1);
    bytes.push(RECORD_VERSION);
    bytes.extend_from_slice(&body);
    Ok(bytes)
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SwapError> {
    match bytes.split_first() {
        Some((&RECORD_VERSION, body)) => bincode::deserialize(body).map_err(|e| SwapError::Storage {
            reason: format!("decode failed: {e}"),
        }),
        Some((version, _)) => Err(SwapError::Storage {
            reason: format!("unsupported record version {version}"),
        }),
        None => Err(SwapError::Storage {
            reason: "empty record".to_string(),
        }),
    }
}
