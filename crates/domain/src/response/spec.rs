//! Response specification type

use std::time::Duration;

use serde_json::Value;

/// Raw reply received from the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResponse {
    /// HTTP status code
    pub status: u16,
    /// Status text (e.g., "OK", "Not Found")
    pub status_text: String,
    /// Response body bytes
    pub body: Vec<u8>,
    /// Response time
    pub duration: Duration,
}

impl ServiceResponse {
    /// Creates a response with the canonical reason phrase left empty.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            status_text: String::new(),
            body: body.into(),
            duration: Duration::ZERO,
        }
    }

    /// Sets the status text.
    #[must_use]
    pub fn with_status_text(mut self, status_text: impl Into<String>) -> Self {
        self.status_text = status_text.into();
        self
    }

    /// Sets the measured response time.
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns true if the session behind the API key is no longer valid.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Returns the `detail` field of a JSON error body, if any.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        let value: Value = serde_json::from_slice(&self.body).ok()?;
        match value.get("detail")? {
            Value::String(detail) => Some(detail.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}
