//! Request types

mod header;
mod spec;

pub use header::{API_KEY_HEADER, CONTENT_TYPE_HEADER, Header, Headers, ORG_URL_HEADER};
pub use spec::{RequestPayload, ServiceRequest, UploadForm};
