//! Smoke test verifying the workspace crates link together.

#![allow(clippy::no_effect_underscore_binding)]

use std::sync::Arc;

#[test]
fn domain_crate_compiles() {
    // Verify domain types are accessible
    let _credentials = docbase_domain::Credentials::new("acme", "key");
    let _collection = docbase_domain::Collection::named("manuals");
    assert!(docbase_domain::validate_name("manuals"));
}

#[test]
fn application_crate_compiles() {
    // Verify application types are accessible
    let _error = docbase_application::ApiError::InvalidAccount;
    let _context = docbase_application::ExecutionContext::detached();
}

#[test]
fn infrastructure_crate_compiles() {
    // Verify adapters plug into the client
    let transport = Arc::new(docbase_infrastructure::ReqwestTransport::new().unwrap_or_else(
        |e| panic!("transport should build: {e}"),
    ));
    let _client = docbase_application::KnowledgeBaseClient::new(
        transport,
        docbase_domain::ServiceConfig::default(),
    );
}
