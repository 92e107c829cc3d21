//! Document and question-answering types

use serde::{Deserialize, Serialize};

/// One earlier exchange of a conversation, sent as `[question, answer]`.
pub type HistoryMessage = (String, String);

/// A question together with the options that shape its answer.
///
/// Unset options are left out of the request so the service applies its own
/// defaults. `conversation_id` is always sent, as `null` when unset.
///
/// ```
/// use docbase_domain::Question;
///
/// let question = Question::new("Which cable?").with_top_k(3).scoped_to("guide.pdf");
/// let json = serde_json::to_value(&question).unwrap();
/// assert_eq!(json["top_k"], 3);
/// assert!(json.get("history_messages").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Question text
    pub question: String,
    /// Number of passages retrieved to answer it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    /// Restricts retrieval to one document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_name: Option<String>,
    /// Earlier exchanges, oldest first
    #[serde(rename = "history_messages", skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<HistoryMessage>,
    /// Conversation to continue
    pub conversation_id: Option<String>,
}

impl Question {
    /// Creates a question with no options set.
    #[must_use]
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            ..Self::default()
        }
    }

    /// Sets the number of passages retrieved.
    #[must_use]
    pub const fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Restricts retrieval to `doc_name`.
    #[must_use]
    pub fn scoped_to(mut self, doc_name: impl Into<String>) -> Self {
        self.doc_name = Some(doc_name.into());
        self
    }

    /// Sets the earlier exchanges of the conversation.
    #[must_use]
    pub fn with_history(mut self, history: Vec<HistoryMessage>) -> Self {
        self.history = history;
        self
    }

    /// Continues the conversation `conversation_id`.
    #[must_use]
    pub fn in_conversation(mut self, conversation_id: impl Into<String>) -> Self {
        self.conversation_id = Some(conversation_id.into());
        self
    }
}

/// A citation backing an answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRef {
    /// Name of the cited document
    #[serde(default, deserialize_with = "crate::serde_util::null_as_default")]
    pub doc_name: String,
    /// Page the citation was taken from
    #[serde(default, deserialize_with = "crate::serde_util::null_as_default")]
    pub page_num: u32,
    /// Excerpt of the cited text
    #[serde(default, deserialize_with = "crate::serde_util::null_as_default")]
    pub sample_text: String,
}

/// Answer to a question asked against a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResult {
    /// Generated answer
    #[serde(default, deserialize_with = "crate::serde_util::null_as_default")]
    pub answer: String,
    /// Citations, possibly empty
    #[serde(default, deserialize_with = "crate::serde_util::null_as_default")]
    pub refs: Vec<AnswerRef>,
    /// Conversation the answer belongs to; pass it back to continue it
    #[serde(default, deserialize_with = "crate::serde_util::null_as_default")]
    pub conversation_id: String,
    /// Server-side identifier of this request
    #[serde(default, deserialize_with = "crate::serde_util::null_as_default")]
    pub request_id: String,
}

impl AskResult {
    /// Returns the distinct document names cited by the answer, in order of first appearance.
    #[must_use]
    pub fn cited_documents(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for reference in &self.refs {
            if !names.contains(&reference.doc_name.as_str()) {
                names.push(&reference.doc_name);
            }
        }
        names
    }
}
