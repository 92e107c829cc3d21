//! Application (chat target) types
//!
//! An application is a named chat endpoint. Its target is either a
//! collection (retrieval-augmented chat) or a model served by a provider.
//! On the wire the type and the target travel as separate fields; here the
//! type is derived from the target so the two cannot disagree.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::collection::PUBLIC_NAMESPACE;
use crate::error::{DomainError, DomainResult};

/// Kind of chat target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApplicationType {
    /// Chat over the documents of a collection
    Collection,
    /// Chat directly with a model
    Gpt,
}

impl ApplicationType {
    /// Returns the wire name of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Collection => "COLLECTION",
            Self::Gpt => "GPT",
        }
    }
}

impl std::fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target of a collection-backed application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionTarget {
    /// Namespace of the collection
    pub namespace_name: String,
    /// Collection name
    pub collection_name: String,
}

/// Target of a model-backed application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GptTarget {
    /// Model provider (e.g., "openai")
    pub provider: String,
    /// Model name (e.g., "gpt-4")
    pub model: String,
}

/// Where an application sends its chats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationTarget {
    /// A collection of documents
    Collection(CollectionTarget),
    /// A model
    Gpt(GptTarget),
}

impl ApplicationTarget {
    /// Returns the application type matching this target.
    #[must_use]
    pub const fn kind(&self) -> ApplicationType {
        match self {
            Self::Collection(_) => ApplicationType::Collection,
            Self::Gpt(_) => ApplicationType::Gpt,
        }
    }
}

/// A named chat target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ApplicationRecord", try_from = "ApplicationRecord")]
pub struct Application {
    /// Application name
    pub name: String,
    /// Chat target
    pub target: ApplicationTarget,
}

impl Application {
    /// Creates an application chatting over a collection in the public namespace.
    #[must_use]
    pub fn collection(name: impl Into<String>, collection_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: ApplicationTarget::Collection(CollectionTarget {
                namespace_name: PUBLIC_NAMESPACE.to_string(),
                collection_name: collection_name.into(),
            }),
        }
    }

    /// Creates an application chatting directly with a model.
    #[must_use]
    pub fn gpt(
        name: impl Into<String>,
        provider: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            target: ApplicationTarget::Gpt(GptTarget {
                provider: provider.into(),
                model: model.into(),
            }),
        }
    }

    /// Returns the application type.
    #[must_use]
    pub const fn kind(&self) -> ApplicationType {
        self.target.kind()
    }
}

/// Wire shape of an application.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ApplicationRecord {
    application_name: String,
    application_type: ApplicationType,
    application_target: Value,
}

impl From<Application> for ApplicationRecord {
    fn from(app: Application) -> Self {
        let kind = app.kind();
        let application_target = match app.target {
            ApplicationTarget::Collection(target) => serde_json::json!({
                "namespace_name": target.namespace_name,
                "collection_name": target.collection_name,
            }),
            ApplicationTarget::Gpt(target) => serde_json::json!({
                "provider": target.provider,
                "model": target.model,
            }),
        };
        Self {
            application_name: app.name,
            application_type: kind,
            application_target,
        }
    }
}

impl TryFrom<ApplicationRecord> for Application {
    type Error = DomainError;

    fn try_from(record: ApplicationRecord) -> DomainResult<Self> {
        let invalid = |e: serde_json::Error| {
            DomainError::InvalidApplication(format!("{}: {e}", record.application_name))
        };

        // Some servers send the target as a JSON-encoded string.
        let target = match record.application_target {
            Value::String(encoded) => serde_json::from_str(&encoded).map_err(invalid)?,
            other => other,
        };

        let target = match record.application_type {
            ApplicationType::Collection => {
                ApplicationTarget::Collection(serde_json::from_value(target).map_err(invalid)?)
            }
            ApplicationType::Gpt => {
                ApplicationTarget::Gpt(serde_json::from_value(target).map_err(invalid)?)
            }
        };

        Ok(Self {
            name: record.application_name,
            target,
        })
    }
}

/// Extracts typed applications from a list-applications reply.
///
/// A null reply or a missing `applications` field yields an empty list.
///
/// # Errors
///
/// Returns `DomainError::InvalidApplication` if an entry cannot be interpreted.
pub fn parse_applications(reply: &Value) -> DomainResult<Vec<Application>> {
    match reply.get("applications") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(list) => serde_json::from_value(list.clone())
            .map_err(|e| DomainError::InvalidApplication(e.to_string())),
    }
}
