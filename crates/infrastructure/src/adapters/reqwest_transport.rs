//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpTransport` port using the reqwest library.
//! It carries every request the client sends.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use docbase_application::ports::{HttpTransport, TransportError};
use docbase_domain::{
    request::{RequestPayload, ServiceRequest, UploadForm},
    response::ServiceResponse,
};
use reqwest::{
    Client,
    multipart::{Form, Part},
};

/// Redirects followed before giving up.
const MAX_REDIRECTS: usize = 10;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport implementation using reqwest.
///
/// Wraps `reqwest::Client` and implements the `HttpTransport` port from the
/// application layer.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a new transport with default settings.
    ///
    /// Default configuration:
    /// - Request timeout: 30 seconds
    /// - Follow redirects: up to 10
    /// - User-Agent: "Docbase/0.1.0"
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a new transport with a custom request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("Docbase/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Builds the multipart form of an upload.
    fn build_form(form: UploadForm) -> Result<Form, TransportError> {
        let mime_type = mime_guess::from_path(&form.file_name)
            .first()
            .unwrap_or(mime::APPLICATION_OCTET_STREAM);

        let file = Part::bytes(form.content)
            .file_name(form.file_name)
            .mime_str(mime_type.essence_str())
            .map_err(|e| TransportError::InvalidBody(e.to_string()))?;

        Ok(Form::new().text("request", form.request_json).part("file", file))
    }

    /// Maps reqwest errors to the port's `TransportError`.
    fn map_error(error: &reqwest::Error) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout;
        }

        if error.is_connect() {
            let message = error.to_string();
            let lowered = message.to_lowercase();
            let host = error
                .url()
                .and_then(|u| u.host_str())
                .unwrap_or("unknown")
                .to_string();

            if lowered.contains("dns") || lowered.contains("resolve") {
                return TransportError::DnsError { host, message };
            }
            if lowered.contains("refused") {
                return TransportError::ConnectionRefused {
                    host,
                    port: error
                        .url()
                        .and_then(reqwest::Url::port_or_known_default)
                        .unwrap_or(443),
                };
            }
            return TransportError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return TransportError::TooManyRedirects { max: MAX_REDIRECTS };
        }

        if error.is_builder() {
            return TransportError::InvalidUrl(error.to_string());
        }

        TransportError::Other(error.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(&self, request: ServiceRequest) -> Result<ServiceResponse, TransportError> {
        let ServiceRequest {
            url,
            headers,
            payload,
        } = request;

        let mut builder = self.client.post(&url);
        for header in headers.iter() {
            builder = builder.header(&header.name, &header.value);
        }

        builder = match payload {
            RequestPayload::Json(json) => builder.body(json),
            RequestPayload::Multipart(form) => builder.multipart(Self::build_form(form)?),
        };

        let start = Instant::now();
        let response = builder.send().await.map_err(|e| Self::map_error(&e))?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default();

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Other(format!("Failed to read body: {e}")))?
            .to_vec();

        Ok(ServiceResponse::new(status.as_u16(), body)
            .with_status_text(status_text)
            .with_duration(start.elapsed()))
    }
}
