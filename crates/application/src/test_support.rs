//! In-memory ports shared by the unit tests.

#![allow(clippy::expect_used, clippy::panic)]

use async_trait::async_trait;
use docbase_domain::{request::ServiceRequest, response::ServiceResponse};
use parking_lot::Mutex;

use crate::ports::{HttpTransport, PageLocation, ServerRedirect, TransportError};

/// Transport that answers every request with the same canned reply.
pub struct MockTransport {
    response: Result<ServiceResponse, TransportError>,
    requests: Mutex<Vec<ServiceRequest>>,
}

impl MockTransport {
    pub fn new(response: Result<ServiceResponse, TransportError>) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn json(status: u16, body: &str) -> Self {
        Self::new(Ok(ServiceResponse::new(status, body)))
    }

    pub fn requests(&self) -> Vec<ServiceRequest> {
        self.requests.lock().clone()
    }

    /// Parses the JSON body of the only request sent.
    pub fn sent_body(&self) -> serde_json::Value {
        let requests = self.requests.lock();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        let json = requests[0].payload.as_json().expect("json payload");
        serde_json::from_str(json).expect("valid json body")
    }

    pub fn sent_url(&self) -> String {
        self.requests.lock()[0].url.clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn post(&self, request: ServiceRequest) -> Result<ServiceResponse, TransportError> {
        self.requests.lock().push(request);
        self.response.clone()
    }
}

/// Page that records every location it is sent to.
pub struct RecordingPage {
    origin: String,
    visits: Mutex<Vec<String>>,
}

impl RecordingPage {
    pub fn new(origin: &str) -> Self {
        Self {
            origin: origin.to_string(),
            visits: Mutex::new(Vec::new()),
        }
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().clone()
    }
}

impl PageLocation for RecordingPage {
    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn assign(&self, href: &str) {
        self.visits.lock().push(href.to_string());
    }
}

/// Server redirect that records every location.
#[derive(Default)]
pub struct RecordingRedirect {
    locations: Mutex<Vec<String>>,
}

impl RecordingRedirect {
    pub fn locations(&self) -> Vec<String> {
        self.locations.lock().clone()
    }
}

impl ServerRedirect for RecordingRedirect {
    fn redirect(&self, location: &str) {
        self.locations.lock().push(location.to_string());
    }
}
