//! Adapter implementations of the application ports

mod page_location;
mod reqwest_transport;
mod server_redirect;

pub use page_location::InMemoryPageLocation;
pub use reqwest_transport::{DEFAULT_TIMEOUT, ReqwestTransport};
pub use server_redirect::CallbackRedirect;
