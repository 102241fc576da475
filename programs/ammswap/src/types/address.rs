//! Account addresses

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque account identifier as handed to us by the host ledger
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccAddress(String);

impl AccAddress {
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    /// Address of a module-owned account, e.g. the pool custody account
    pub fn module(name: &str) -> Self {
        Self(format!("module/{name}"))
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
