//! Service endpoint configuration

use serde::{Deserialize, Serialize};

/// Production host suffix appended to the account identifier.
pub const DEFAULT_HOST_SUFFIX: &str = ".us-west-2.aws.chatbees.ai";

/// Host suffix value that selects the local development endpoint.
pub const LOCAL_HOST_MARKER: &str = "localhost";

/// Endpoint used when running against a local service.
pub const LOCAL_ENDPOINT: &str = "http://localhost:8080";

/// Where requests for an account are sent.
///
/// # Example
///
/// ```
/// use docbase_domain::ServiceConfig;
///
/// let config = ServiceConfig::default();
/// assert_eq!(
///     config.endpoint_for("acme"),
///     "https://acme.us-west-2.aws.chatbees.ai"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Suffix appended to the account id to form the host, or `"localhost"`
    #[serde(default = "default_host_suffix")]
    pub host_suffix: String,
    /// Fixed base URL that replaces endpoint resolution entirely
    #[serde(default)]
    pub endpoint_override: Option<String>,
}

fn default_host_suffix() -> String {
    DEFAULT_HOST_SUFFIX.to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host_suffix: default_host_suffix(),
            endpoint_override: None,
        }
    }
}

impl ServiceConfig {
    /// Creates a configuration with the given host suffix.
    #[must_use]
    pub fn new(host_suffix: impl Into<String>) -> Self {
        Self {
            host_suffix: host_suffix.into(),
            endpoint_override: None,
        }
    }

    /// Configuration pointing at the local development endpoint.
    #[must_use]
    pub fn local() -> Self {
        Self::new(LOCAL_HOST_MARKER)
    }

    /// Sends every request to `endpoint` regardless of account.
    #[must_use]
    pub fn with_endpoint_override(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint_override = Some(endpoint.into());
        self
    }

    /// Returns true when the host suffix selects the local endpoint.
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.host_suffix == LOCAL_HOST_MARKER
    }

    /// Resolves the base URL for an account.
    #[must_use]
    pub fn endpoint_for(&self, account_id: &str) -> String {
        if let Some(endpoint) = &self.endpoint_override {
            return endpoint.trim_end_matches('/').to_string();
        }
        if self.is_local() {
            return LOCAL_ENDPOINT.to_string();
        }
        format!("https://{account_id}{}", self.host_suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_endpoint() {
        let config = ServiceConfig::new(".preprod.example.ai");
        assert_eq!(config.endpoint_for("acme"), "https://acme.preprod.example.ai");
        assert!(!config.is_local());
    }

    #[test]
    fn test_local_endpoint_ignores_account() {
        let config = ServiceConfig::local();
        assert!(config.is_local());
        assert_eq!(config.endpoint_for("acme"), "http://localhost:8080");
        assert_eq!(config.endpoint_for("other"), "http://localhost:8080");
    }

    #[test]
    fn test_endpoint_override() {
        let config = ServiceConfig::default().with_endpoint_override("http://127.0.0.1:9999/");
        assert_eq!(config.endpoint_for("acme"), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: ServiceConfig = serde_json::from_str("{}").expect("valid config");
        assert_eq!(config, ServiceConfig::default());
    }
}
