//! Collection types

use serde::{Deserialize, Serialize};

/// Namespace used for every namespace-scoped call.
pub const PUBLIC_NAMESPACE: &str = "public";

/// Persona reported when a collection has no chat attributes configured.
pub const DEFAULT_PERSONA: &str = "You are an AI assistant.";

/// Negative response reported when a collection has no chat attributes configured.
pub const DEFAULT_NEGATIVE_RESPONSE: &str = "I'm sorry, I don't have relevant information to answer your question. If you have any other question, feel free to ask!";

/// A named set of ingested documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection name
    pub name: String,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the collection can be read without an API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_read: Option<bool>,
    /// Persona used when answering questions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    /// Reply used when no relevant information is found
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_response: Option<String>,
}

impl Collection {
    /// Creates a collection carrying only its name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Result of describing a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionDescription {
    /// The described collection, with defaults applied
    pub collection: Collection,
}

/// Chat configuration of a collection.
///
/// `None` fields are sent as JSON `null`, leaving the server to decide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatAttributes {
    /// Persona used when answering questions
    pub persona: Option<String>,
    /// Reply used when no relevant information is found
    pub negative_response: Option<String>,
}

impl ChatAttributes {
    /// Returns the persona, falling back to [`DEFAULT_PERSONA`].
    #[must_use]
    pub fn persona_or_default(&self) -> &str {
        self.persona.as_deref().unwrap_or(DEFAULT_PERSONA)
    }

    /// Returns the negative response, falling back to [`DEFAULT_NEGATIVE_RESPONSE`].
    #[must_use]
    pub fn negative_response_or_default(&self) -> &str {
        self.negative_response
            .as_deref()
            .unwrap_or(DEFAULT_NEGATIVE_RESPONSE)
    }
}
