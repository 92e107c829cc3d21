//! Resource operations
//!
//! Each module adds one resource group to `KnowledgeBaseClient`: it
//! serializes a fixed-shape body, sends it through the pipeline and maps the
//! reply into domain types.

mod api_keys;
mod applications;
mod collections;
mod crawls;
mod documents;

use docbase_domain::PUBLIC_NAMESPACE;
use serde::Serialize;

/// Body addressing one collection of the public namespace.
#[derive(Serialize)]
struct CollectionRequest<'a> {
    namespace_name: &'a str,
    collection_name: &'a str,
}

impl<'a> CollectionRequest<'a> {
    const fn public(collection_name: &'a str) -> Self {
        Self {
            namespace_name: PUBLIC_NAMESPACE,
            collection_name,
        }
    }
}

/// Body of the calls that take no parameters.
#[derive(Serialize)]
struct EmptyRequest {}
