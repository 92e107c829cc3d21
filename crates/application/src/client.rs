//! Knowledge-base client
//!
//! The resource operations are implemented in `use_cases`, one module per
//! resource group, as `impl` blocks on [`KnowledgeBaseClient`].

use std::sync::Arc;

use docbase_domain::ServiceConfig;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::outcome::Outcome;
use crate::pipeline::{ExecutionContext, RequestPipeline};
use crate::ports::HttpTransport;

/// Typed access to collections, documents, API keys and applications.
///
/// # Example
///
/// ```ignore
/// let transport = Arc::new(ReqwestTransport::new()?);
/// let client = KnowledgeBaseClient::new(transport, ServiceConfig::default());
///
/// let credentials = Credentials::new("acme", api_key);
/// if let Outcome::Completed(collections) = client.list_collections(&credentials).await? {
///     println!("{} collections", collections.len());
/// }
/// ```
#[derive(Debug)]
pub struct KnowledgeBaseClient<T: HttpTransport> {
    pipeline: RequestPipeline<T>,
}

impl<T: HttpTransport> KnowledgeBaseClient<T> {
    /// Creates a client with a detached execution context.
    pub fn new(transport: Arc<T>, config: ServiceConfig) -> Self {
        Self::from_pipeline(RequestPipeline::new(transport, config))
    }

    /// Wraps an existing pipeline.
    pub const fn from_pipeline(pipeline: RequestPipeline<T>) -> Self {
        Self { pipeline }
    }

    /// Sets the execution context used for sign-in redirects.
    #[must_use]
    pub fn with_context(self, context: ExecutionContext) -> Self {
        Self {
            pipeline: self.pipeline.with_context(context),
        }
    }

    /// Returns the underlying pipeline.
    pub const fn pipeline(&self) -> &RequestPipeline<T> {
        &self.pipeline
    }

    /// Surfaces an error caught by a caller; see [`RequestPipeline::report_error`].
    pub fn report_error(&self, error: &ApiError, prefix: &str, redirect_target: Option<&str>) {
        self.pipeline.report_error(error, prefix, redirect_target);
    }
}

/// Interprets a raw reply as `R`, treating a JSON `null` reply as empty.
pub(crate) fn decode_reply<R>(outcome: Outcome<Value>) -> ApiResult<Outcome<R>>
where
    R: DeserializeOwned + Default,
{
    outcome.try_map(|value| {
        if value.is_null() {
            Ok(R::default())
        } else {
            serde_json::from_value(value).map_err(ApiError::Decode)
        }
    })
}
