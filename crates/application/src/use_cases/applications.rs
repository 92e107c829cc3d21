//! Application (chat target) operations

use docbase_domain::{Application, AskResult, Credentials, Question, parse_applications};
use serde::Serialize;
use serde_json::Value;

use crate::client::KnowledgeBaseClient;
use crate::error::{ApiError, ApiResult};
use crate::outcome::Outcome;
use crate::ports::HttpTransport;

use super::EmptyRequest;

#[derive(Serialize)]
struct CreateApplicationRequest<'a> {
    application: &'a Application,
}

#[derive(Serialize)]
struct DeleteApplicationRequest<'a> {
    application_name: &'a str,
}

#[derive(Serialize)]
struct AskApplicationRequest<'a> {
    application_name: &'a str,
    // The question travels as an embedded JSON document.
    app_request: String,
}

impl<T: HttpTransport> KnowledgeBaseClient<T> {
    /// Creates an application.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is empty or the request fails.
    pub async fn create_application(
        &self,
        credentials: &Credentials,
        application: &Application,
    ) -> ApiResult<Outcome<Value>> {
        self.pipeline()
            .send(
                credentials,
                "/applications/create",
                &CreateApplicationRequest { application },
            )
            .await
    }

    /// Deletes an application.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is empty or the request fails.
    pub async fn delete_application(
        &self,
        credentials: &Credentials,
        application_name: &str,
    ) -> ApiResult<Outcome<Value>> {
        self.pipeline()
            .send(
                credentials,
                "/applications/delete",
                &DeleteApplicationRequest { application_name },
            )
            .await
    }

    /// Lists the applications of the account; the reply is returned unchanged.
    ///
    /// Use [`parse_applications`] to interpret it.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is empty or the request fails.
    pub async fn list_applications(&self, credentials: &Credentials) -> ApiResult<Outcome<Value>> {
        self.pipeline()
            .send(credentials, "/applications/list", &EmptyRequest {})
            .await
    }

    /// Asks a question through an application.
    ///
    /// The application decides which collection or model answers.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is empty, the request fails or the
    /// reply is malformed.
    pub async fn ask_application(
        &self,
        credentials: &Credentials,
        application_name: &str,
        question: &Question,
    ) -> ApiResult<Outcome<AskResult>> {
        let body = AskApplicationRequest {
            application_name,
            app_request: serde_json::to_string(question).map_err(ApiError::Encode)?,
        };
        let outcome = self
            .pipeline()
            .send(credentials, "/applications/ask", &body)
            .await?;

        // The answer may come back JSON-encoded inside a string.
        outcome.try_map(|reply| match reply {
            Value::Null => Ok(AskResult::default()),
            Value::String(encoded) => serde_json::from_str(&encoded).map_err(ApiError::Decode),
            other => serde_json::from_value(other).map_err(ApiError::Decode),
        })
    }

    /// Lists the applications of the account as typed records.
    ///
    /// # Errors
    ///
    /// Same as [`list_applications`](Self::list_applications), plus
    /// `ApiError::Domain` if an entry cannot be interpreted.
    pub async fn list_application_records(
        &self,
        credentials: &Credentials,
    ) -> ApiResult<Outcome<Vec<Application>>> {
        let outcome = self.list_applications(credentials).await?;
        Ok(outcome.try_map(|reply| parse_applications(&reply))?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use docbase_domain::ServiceConfig;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::test_support::MockTransport;

    fn client(transport: &Arc<MockTransport>) -> KnowledgeBaseClient<MockTransport> {
        KnowledgeBaseClient::new(Arc::clone(transport), ServiceConfig::new(".example.ai"))
    }

    fn credentials() -> Credentials {
        Credentials::new("acme", "key")
    }

    #[tokio::test]
    async fn test_create_collection_application_body() {
        let transport = Arc::new(MockTransport::json(200, "{}"));
        let app = Application::collection("support-bot", "manuals");
        client(&transport)
            .create_application(&credentials(), &app)
            .await
            .expect("create should succeed");

        assert_eq!(transport.sent_url(), "https://acme.example.ai/applications/create");
        assert_eq!(
            transport.sent_body(),
            json!({
                "application": {
                    "application_name": "support-bot",
                    "application_type": "COLLECTION",
                    "application_target": {
                        "namespace_name": "public",
                        "collection_name": "manuals"
                    }
                }
            })
        );
    }

    #[tokio::test]
    async fn test_create_gpt_application_body() {
        let transport = Arc::new(MockTransport::json(200, "{}"));
        let app = Application::gpt("raw-chat", "openai", "gpt-4");
        client(&transport)
            .create_application(&credentials(), &app)
            .await
            .expect("create should succeed");

        assert_eq!(
            transport.sent_body()["application"]["application_target"],
            json!({ "provider": "openai", "model": "gpt-4" })
        );
    }

    #[tokio::test]
    async fn test_delete_application_body() {
        let transport = Arc::new(MockTransport::json(200, "{}"));
        client(&transport)
            .delete_application(&credentials(), "raw-chat")
            .await
            .expect("delete should succeed");

        assert_eq!(transport.sent_url(), "https://acme.example.ai/applications/delete");
        assert_eq!(transport.sent_body(), json!({ "application_name": "raw-chat" }));
    }

    #[tokio::test]
    async fn test_list_applications_passes_reply_through() {
        let reply = json!({
            "applications": [{
                "application_name": "raw-chat",
                "application_type": "GPT",
                "application_target": { "provider": "openai", "model": "gpt-4" }
            }],
            "next_page": null
        });
        let transport = Arc::new(MockTransport::json(200, &reply.to_string()));
        let outcome = client(&transport)
            .list_applications(&credentials())
            .await
            .expect("list should succeed");

        assert_eq!(transport.sent_body(), json!({}));
        assert_eq!(outcome, Outcome::Completed(reply));
    }

    #[tokio::test]
    async fn test_list_application_records() {
        let reply = json!({
            "applications": [{
                "application_name": "support-bot",
                "application_type": "COLLECTION",
                "application_target": { "namespace_name": "public", "collection_name": "manuals" }
            }]
        });
        let transport = Arc::new(MockTransport::json(200, &reply.to_string()));
        let outcome = client(&transport)
            .list_application_records(&credentials())
            .await
            .expect("list should succeed");

        assert_eq!(
            outcome,
            Outcome::Completed(vec![Application::collection("support-bot", "manuals")])
        );
    }

    #[tokio::test]
    async fn test_ask_application_embeds_question() {
        let transport = Arc::new(MockTransport::json(200, r#"{"answer": "Hi.", "refs": []}"#));
        let question = Question::new("Hello?").with_top_k(2);
        let outcome = client(&transport)
            .ask_application(&credentials(), "support-bot", &question)
            .await
            .expect("ask should succeed");

        let body = transport.sent_body();
        assert_eq!(transport.sent_url(), "https://acme.example.ai/applications/ask");
        assert_eq!(body["application_name"], json!("support-bot"));
        let embedded: Value = serde_json::from_str(body["app_request"].as_str().expect("string"))
            .expect("embedded json");
        assert_eq!(
            embedded,
            json!({ "question": "Hello?", "top_k": 2, "conversation_id": null })
        );
        assert_eq!(outcome.into_option().map(|a| a.answer).as_deref(), Some("Hi."));
    }

    #[tokio::test]
    async fn test_ask_application_decodes_string_reply() {
        let encoded = json!(r#"{"answer": "Encoded.", "refs": [], "conversation_id": "c-2"}"#);
        let transport = Arc::new(MockTransport::json(200, &encoded.to_string()));
        let answer = client(&transport)
            .ask_application(&credentials(), "support-bot", &Question::new("Hello?"))
            .await
            .expect("ask should succeed")
            .into_option()
            .expect("completed");

        assert_eq!(answer.answer, "Encoded.");
        assert_eq!(answer.conversation_id, "c-2");
    }

    #[tokio::test]
    async fn test_application_calls_reject_empty_account() {
        let transport = Arc::new(MockTransport::json(200, "{}"));
        let client = client(&transport);
        let nobody = Credentials::new("", "key");
        let app = Application::gpt("a", "openai", "gpt-4");

        assert!(matches!(
            client.create_application(&nobody, &app).await,
            Err(ApiError::InvalidAccount)
        ));
        assert!(matches!(
            client.delete_application(&nobody, "a").await,
            Err(ApiError::InvalidAccount)
        ));
        assert!(matches!(
            client.list_applications(&nobody).await,
            Err(ApiError::InvalidAccount)
        ));
        assert!(matches!(
            client.ask_application(&nobody, "a", &Question::new("q")).await,
            Err(ApiError::InvalidAccount)
        ));
        assert!(transport.requests().is_empty());
    }
}
