//! HTTP transport port

use async_trait::async_trait;
use docbase_domain::{request::ServiceRequest, response::ServiceResponse};
use thiserror::Error;

/// Errors raised while moving a request over the network.
///
/// A reply with a non-2xx status is not a transport error; it is returned
/// as a regular `ServiceResponse`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The host name could not be resolved.
    #[error("could not resolve host {host}: {message}")]
    DnsError {
        /// Host that failed to resolve
        host: String,
        /// Underlying error message
        message: String,
    },

    /// The server refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host
        host: String,
        /// Target port
        port: u16,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The transport's own timeout elapsed.
    #[error("request timed out")]
    Timeout,

    /// The server redirected too many times.
    #[error("too many redirects (max {max})")]
    TooManyRedirects {
        /// Redirect limit
        max: usize,
    },

    /// The request body could not be built.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Any other failure.
    #[error("{0}")]
    Other(String),
}

/// Port for sending POST requests to the service.
///
/// This trait abstracts the HTTP library, so the pipeline can be exercised
/// against an in-memory transport in tests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends the request and returns the reply, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be delivered or the reply
    /// cannot be read.
    async fn post(&self, request: ServiceRequest) -> Result<ServiceResponse, TransportError>;
}
