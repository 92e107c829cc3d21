//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The account identifier is empty.
    #[error("Account ID not found")]
    EmptyAccountId,

    /// A collection, key or application name does not satisfy the naming rules.
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// An email address failed the sanity check.
    #[error("invalid email: {0}")]
    InvalidEmail(String),

    /// An application record returned by the service could not be interpreted.
    #[error("invalid application record: {0}")]
    InvalidApplication(String),

    /// A crawl status code outside the known set.
    #[error("unknown crawl status: {0}")]
    UnknownCrawlStatus(i64),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
