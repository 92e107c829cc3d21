//! Outgoing service request

use super::header::Headers;

/// A file sent to the service as a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadForm {
    /// JSON document sent in the `request` form field
    pub request_json: String,
    /// File name reported in the `file` part
    pub file_name: String,
    /// File contents
    pub content: Vec<u8>,
}

/// Body of a service request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestPayload {
    /// Serialized JSON document
    Json(String),
    /// Multipart form with a `request` field and a `file` part
    Multipart(UploadForm),
}

impl RequestPayload {
    /// Returns true for multipart uploads.
    #[must_use]
    pub const fn is_upload(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }

    /// Returns the JSON text of a non-upload payload.
    #[must_use]
    pub fn as_json(&self) -> Option<&str> {
        match self {
            Self::Json(text) => Some(text),
            Self::Multipart(_) => None,
        }
    }
}

/// A fully resolved POST request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRequest {
    /// Absolute URL
    pub url: String,
    /// Headers to send
    pub headers: Headers,
    /// Request body
    pub payload: RequestPayload,
}

impl ServiceRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(url: impl Into<String>, headers: Headers, payload: RequestPayload) -> Self {
        Self {
            url: url.into(),
            headers,
            payload,
        }
    }
}
