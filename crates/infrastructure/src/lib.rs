//! Docbase Infrastructure - Adapters and configuration
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, and loads the service configuration.

pub mod adapters;
pub mod config;

pub use adapters::{CallbackRedirect, DEFAULT_TIMEOUT, InMemoryPageLocation, ReqwestTransport};
pub use self::config::{ConfigError, load_service_config};
