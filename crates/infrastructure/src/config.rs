//! Service configuration loading
//!
//! Defaults first, then environment variables prefixed with `DOCBASE_`:
//!
//! | Variable | Field | Default |
//! |---|---|---|
//! | `DOCBASE_HOST_SUFFIX` | `host_suffix` | `.us-west-2.aws.chatbees.ai` |
//! | `DOCBASE_ENDPOINT_OVERRIDE` | `endpoint_override` | unset |

use ::config::{Config, Environment};
use docbase_domain::{ServiceConfig, config::DEFAULT_HOST_SUFFIX};
use thiserror::Error;
use tracing::debug;

/// Prefix of the environment variables read by [`load_service_config`].
pub const ENV_PREFIX: &str = "DOCBASE";

/// Errors raised while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or a value has the wrong type.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] ::config::ConfigError),
}

/// Loads the service configuration from the process environment.
///
/// # Errors
///
/// Returns an error if a variable cannot be interpreted.
pub fn load_service_config() -> Result<ServiceConfig, ConfigError> {
    load_from(Environment::with_prefix(ENV_PREFIX))
}

/// Loads the service configuration from an explicit environment source.
///
/// # Errors
///
/// Returns an error if a variable cannot be interpreted.
pub fn load_from(environment: Environment) -> Result<ServiceConfig, ConfigError> {
    let mut service: ServiceConfig = Config::builder()
        .set_default("host_suffix", DEFAULT_HOST_SUFFIX)?
        .add_source(environment)
        .build()?
        .try_deserialize()?;

    // An exported but empty override means "no override".
    if service
        .endpoint_override
        .as_deref()
        .is_some_and(|endpoint| endpoint.trim().is_empty())
    {
        service.endpoint_override = None;
    }
    debug!(
        host_suffix = %service.host_suffix,
        endpoint_override = ?service.endpoint_override,
        "service configuration loaded"
    );
    Ok(service)
}
