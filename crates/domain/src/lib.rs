//! Docbase Domain - Core types
//!
//! This crate defines the domain model for the Docbase knowledge-base client.
//! All types here are pure Rust with no I/O dependencies.

pub mod account;
pub mod api_key;
pub mod application;
pub mod collection;
pub mod config;
pub mod crawl;
pub mod document;
pub mod error;
pub mod navigation;
pub mod request;
pub mod response;
pub mod serde_util;
pub mod validation;

pub use account::Credentials;
pub use api_key::ApiKey;
pub use application::{
    Application, ApplicationTarget, ApplicationType, CollectionTarget, GptTarget,
    parse_applications,
};
pub use collection::{
    ChatAttributes, Collection, CollectionDescription, DEFAULT_NEGATIVE_RESPONSE, DEFAULT_PERSONA,
    PUBLIC_NAMESPACE,
};
pub use config::ServiceConfig;
pub use crawl::{CrawlReport, CrawlStatus, PageStats};
pub use document::{AnswerRef, AskResult, HistoryMessage, Question};
pub use error::{DomainError, DomainResult};
pub use validation::{ensure_email, ensure_name, validate_email, validate_name};
