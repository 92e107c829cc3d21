//! Account credentials

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifies the tenant and the key used to authenticate every call.
///
/// The account identifier is embedded into the service hostname, so an
/// empty identifier can never produce a valid request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Tenant identifier (e.g., "acme")
    pub account_id: String,
    /// API key sent in the `api-key` header
    pub api_key: String,
}

impl Credentials {
    /// Creates credentials for the given account and key.
    #[must_use]
    pub fn new(account_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            api_key: api_key.into(),
        }
    }

    /// Checks that the account identifier is usable.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyAccountId` if the identifier is empty.
    pub fn ensure_account(&self) -> DomainResult<&str> {
        if self.account_id.is_empty() {
            return Err(DomainError::EmptyAccountId);
        }
        Ok(&self.account_id)
    }
}
