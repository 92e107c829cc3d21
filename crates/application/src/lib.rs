//! Docbase Application - Request pipeline and resource operations
//!
//! This crate defines the client core with:
//! - Port traits for the HTTP transport and sign-in navigation
//! - The authenticated request pipeline
//! - Typed operations on collections, documents, crawls, API keys and applications
//! - Chat sessions that carry their own history

pub mod chat;
pub mod client;
pub mod error;
pub mod outcome;
pub mod pipeline;
pub mod ports;
mod use_cases;

#[cfg(test)]
mod test_support;

pub use chat::ChatSession;
pub use client::KnowledgeBaseClient;
pub use error::{ApiError, ApiResult};
pub use outcome::Outcome;
pub use pipeline::{ExecutionContext, RequestPipeline};
pub use ports::{HttpTransport, PageLocation, ServerRedirect, TransportError};
