//! API key types

use serde::{Deserialize, Serialize};

/// An API key as listed by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    /// Key name
    pub name: String,
    /// Key value, always masked by the server
    pub value: String,
}

impl ApiKey {
    /// Creates an API key entry.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
