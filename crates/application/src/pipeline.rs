//! Request pipeline
//!
//! Every resource operation goes through [`RequestPipeline`]: it resolves
//! the account endpoint, assembles the authentication headers, POSTs the
//! body and turns the reply into parsed JSON, an error, or an expired
//! session. A 401 reply triggers exactly one sign-in redirect through the
//! navigation ports of the [`ExecutionContext`].

use std::fmt;
use std::sync::Arc;

use docbase_domain::{
    Credentials, ServiceConfig,
    navigation::{SESSION_EXPIRED_REASON, sign_in_location},
    request::{
        API_KEY_HEADER, CONTENT_TYPE_HEADER, Headers, ORG_URL_HEADER, RequestPayload,
        ServiceRequest, UploadForm,
    },
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::error::{ApiError, ApiResult};
use crate::outcome::Outcome;
use crate::ports::{HttpTransport, PageLocation, ServerRedirect};

/// Where the client is running, as far as navigation is concerned.
///
/// An interactive page takes precedence over a server redirect. With
/// neither, sign-in redirects are only logged.
#[derive(Clone, Default)]
pub struct ExecutionContext {
    page: Option<Arc<dyn PageLocation>>,
    server: Option<Arc<dyn ServerRedirect>>,
}

impl ExecutionContext {
    /// A context without any navigation capability.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// A context backed by an interactive page.
    #[must_use]
    pub fn interactive(page: Arc<dyn PageLocation>) -> Self {
        Self {
            page: Some(page),
            server: None,
        }
    }

    /// A non-interactive context that redirects through its host.
    #[must_use]
    pub fn server(redirect: Arc<dyn ServerRedirect>) -> Self {
        Self {
            page: None,
            server: Some(redirect),
        }
    }

    fn page_is_local(&self) -> bool {
        self.page
            .as_ref()
            .is_some_and(|page| page.origin().contains("localhost"))
    }

    fn navigate(&self, location: &str) {
        if let Some(page) = &self.page {
            page.assign(location);
        } else if let Some(server) = &self.server {
            server.redirect(location);
        } else {
            warn!(location, "no navigation context available, redirect skipped");
        }
    }
}

impl fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("interactive", &self.page.is_some())
            .field("server_redirect", &self.server.is_some())
            .finish()
    }
}

/// Builds, sends and interprets authenticated POST requests.
pub struct RequestPipeline<T: HttpTransport> {
    transport: Arc<T>,
    config: ServiceConfig,
    context: ExecutionContext,
}

impl<T: HttpTransport> RequestPipeline<T> {
    /// Creates a pipeline with a detached execution context.
    pub fn new(transport: Arc<T>, config: ServiceConfig) -> Self {
        Self {
            transport,
            config,
            context: ExecutionContext::detached(),
        }
    }

    /// Sets the execution context used for navigation.
    #[must_use]
    pub fn with_context(mut self, context: ExecutionContext) -> Self {
        self.context = context;
        self
    }

    /// Resolves the base URL for an account.
    pub fn resolve_endpoint(&self, account_id: &str) -> String {
        self.config.endpoint_for(account_id)
    }

    /// Builds the headers for a call.
    ///
    /// Uploads carry no content type so the transport can set the multipart
    /// boundary. The account is named explicitly whenever the host cannot
    /// carry it: against the local endpoint or an endpoint override, or from
    /// a local page.
    pub fn build_headers(&self, account_id: &str, api_key: &str, is_upload: bool) -> Headers {
        let mut headers = Headers::new();
        headers.set(API_KEY_HEADER, api_key);
        if !is_upload {
            headers.set(CONTENT_TYPE_HEADER, "application/json");
        }
        if self.config.is_local()
            || self.config.endpoint_override.is_some()
            || self.context.page_is_local()
        {
            headers.set(ORG_URL_HEADER, account_id);
        }
        headers
    }

    /// POSTs `body` as JSON to `url_suffix` on the account endpoint.
    ///
    /// # Errors
    ///
    /// - `ApiError::InvalidAccount` if the account id is empty (nothing is sent)
    /// - `ApiError::RequestFailed` for a non-2xx status other than 401
    /// - `ApiError::Transport` or `ApiError::Decode` if delivery or parsing fails
    pub async fn send<B>(
        &self,
        credentials: &Credentials,
        url_suffix: &str,
        body: &B,
    ) -> ApiResult<Outcome<Value>>
    where
        B: Serialize + Sync + ?Sized,
    {
        if credentials.ensure_account().is_err() {
            return Err(ApiError::InvalidAccount);
        }
        let json = serde_json::to_string(body).map_err(ApiError::Encode)?;
        self.dispatch(credentials, url_suffix, RequestPayload::Json(json))
            .await
    }

    /// POSTs a multipart upload to `url_suffix` on the account endpoint.
    ///
    /// # Errors
    ///
    /// Same as [`send`](Self::send).
    pub async fn send_upload(
        &self,
        credentials: &Credentials,
        url_suffix: &str,
        form: UploadForm,
    ) -> ApiResult<Outcome<Value>> {
        self.dispatch(credentials, url_suffix, RequestPayload::Multipart(form))
            .await
    }

    async fn dispatch(
        &self,
        credentials: &Credentials,
        url_suffix: &str,
        payload: RequestPayload,
    ) -> ApiResult<Outcome<Value>> {
        let account_id = credentials
            .ensure_account()
            .map_err(|_| ApiError::InvalidAccount)?;

        let url = format!("{}{url_suffix}", self.resolve_endpoint(account_id));
        let headers = self.build_headers(account_id, &credentials.api_key, payload.is_upload());
        debug!(account = account_id, url_suffix, "sending request");

        let response = match self
            .transport
            .post(ServiceRequest::new(url, headers, payload))
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, url_suffix, "request failed");
                return Err(e.into());
            }
        };

        debug!(
            status = response.status,
            elapsed_ms = u64::try_from(response.duration.as_millis()).unwrap_or(u64::MAX),
            url_suffix,
            "response received"
        );

        if response.is_success() {
            return match serde_json::from_slice(&response.body) {
                Ok(value) => Ok(Outcome::Completed(value)),
                Err(e) => {
                    error!(error = %e, url_suffix, "response body is not valid JSON");
                    Err(ApiError::Decode(e))
                }
            };
        }

        if response.is_unauthorized() {
            warn!(account = account_id, url_suffix, "session expired");
            self.redirect_to_login(SESSION_EXPIRED_REASON);
            return Ok(Outcome::SessionExpired);
        }

        let error = ApiError::RequestFailed {
            status: response.status,
            status_text: response.status_text.clone(),
            detail: response.detail(),
        };
        error!(error = %error, url_suffix, "request rejected");
        Err(error)
    }

    /// Navigates to the sign-in page, carrying `reason` when it is not empty.
    pub fn redirect_to_login(&self, reason: &str) {
        self.context.navigate(&sign_in_location(reason));
    }

    /// Surfaces an error caught by a caller.
    ///
    /// An expired session leads to the sign-in page. Anything else is logged
    /// as `{prefix} error: {message}`; an interactive page is then sent to
    /// `redirect_target` when one is given.
    pub fn report_error(&self, error: &ApiError, prefix: &str, redirect_target: Option<&str>) {
        if error.is_unauthorized() {
            self.redirect_to_login(SESSION_EXPIRED_REASON);
            return;
        }

        error!("{prefix} error: {error}");
        if let (Some(page), Some(target)) = (&self.context.page, redirect_target)
            && !target.is_empty()
        {
            page.assign(target);
        }
    }
}

impl<T: HttpTransport> fmt::Debug for RequestPipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestPipeline")
            .field("config", &self.config)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
