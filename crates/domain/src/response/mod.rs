//! Response types

mod spec;

pub use spec::ServiceResponse;
