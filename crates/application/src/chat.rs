//! Conversational question answering over one collection

use docbase_domain::{AskResult, Credentials, HistoryMessage, Question};

use crate::client::KnowledgeBaseClient;
use crate::error::ApiResult;
use crate::outcome::Outcome;
use crate::ports::HttpTransport;

/// A chat over one collection, optionally narrowed to a single document.
///
/// Every completed answer is appended to the history, which is sent with the
/// next question so follow-ups can refer back to earlier turns.
#[derive(Debug)]
pub struct ChatSession<'a, T: HttpTransport> {
    client: &'a KnowledgeBaseClient<T>,
    credentials: Credentials,
    collection_name: String,
    doc_name: Option<String>,
    history: Vec<HistoryMessage>,
}

impl<T: HttpTransport> KnowledgeBaseClient<T> {
    /// Starts a chat over `collection_name`, or over one of its documents.
    pub fn chat(
        &self,
        credentials: Credentials,
        collection_name: impl Into<String>,
        doc_name: Option<String>,
    ) -> ChatSession<'_, T> {
        ChatSession {
            client: self,
            credentials,
            collection_name: collection_name.into(),
            doc_name,
            history: Vec::new(),
        }
    }
}

impl<T: HttpTransport> ChatSession<'_, T> {
    /// Asks the next question of the conversation.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is empty, the request fails or the
    /// reply is malformed. The history is left unchanged in that case.
    pub async fn ask(
        &mut self,
        question: &str,
        top_k: Option<u32>,
    ) -> ApiResult<Outcome<AskResult>> {
        let mut request = Question::new(question).with_history(self.history.clone());
        request.top_k = top_k;
        request.doc_name.clone_from(&self.doc_name);

        let outcome = self
            .client
            .ask_question(&self.credentials, &self.collection_name, &request)
            .await?;
        if let Outcome::Completed(answer) = &outcome {
            self.history
                .push((question.to_string(), answer.answer.clone()));
        }
        Ok(outcome)
    }

    /// Returns the (question, answer) pairs exchanged so far.
    pub fn history(&self) -> &[HistoryMessage] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use docbase_domain::ServiceConfig;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::error::ApiError;
    use crate::test_support::MockTransport;

    fn client(transport: &Arc<MockTransport>) -> KnowledgeBaseClient<MockTransport> {
        KnowledgeBaseClient::new(Arc::clone(transport), ServiceConfig::new(".example.ai"))
    }

    fn sent_bodies(transport: &MockTransport) -> Vec<serde_json::Value> {
        transport
            .requests()
            .iter()
            .map(|request| {
                let json = request.payload.as_json().expect("json payload");
                serde_json::from_str(json).expect("valid json body")
            })
            .collect()
    }

    #[tokio::test]
    async fn test_chat_sends_previous_turns() {
        let transport = Arc::new(MockTransport::json(200, r#"{"answer": "Blue.", "refs": []}"#));
        let client = client(&transport);
        let mut chat = client.chat(
            Credentials::new("acme", "key"),
            "manuals",
            Some("guide.pdf".to_string()),
        );

        chat.ask("Which cable?", Some(4)).await.expect("first turn");
        chat.ask("And the plug?", None).await.expect("second turn");

        let bodies = sent_bodies(&transport);
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[0]["doc_name"], json!("guide.pdf"));
        assert_eq!(bodies[0]["top_k"], json!(4));
        assert!(bodies[0].get("history_messages").is_none());
        assert_eq!(
            bodies[1]["history_messages"],
            json!([["Which cable?", "Blue."]])
        );
        assert!(bodies[1].get("top_k").is_none());
        assert_eq!(chat.history().len(), 2);
    }

    #[tokio::test]
    async fn test_expired_session_keeps_history() {
        let transport = Arc::new(MockTransport::json(401, "{}"));
        let client = client(&transport);
        let mut chat = client.chat(Credentials::new("acme", "key"), "manuals", None);

        let outcome = chat.ask("Which cable?", None).await.expect("no error");

        assert!(outcome.is_expired());
        assert!(chat.history().is_empty());
    }

    #[tokio::test]
    async fn test_chat_rejects_empty_account() {
        let transport = Arc::new(MockTransport::json(200, "{}"));
        let client = client(&transport);
        let mut chat = client.chat(Credentials::new("", "key"), "manuals", None);

        assert!(matches!(
            chat.ask("Which cable?", None).await,
            Err(ApiError::InvalidAccount)
        ));
        assert!(chat.history().is_empty());
        assert!(transport.requests().is_empty());
    }
}
