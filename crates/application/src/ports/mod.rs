//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the client core and its host.
//! Each port is a trait implemented by adapters in the infrastructure layer.

mod navigation;
mod transport;

pub use navigation::{PageLocation, ServerRedirect};
pub use transport::{HttpTransport, TransportError};
