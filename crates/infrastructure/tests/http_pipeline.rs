//! End-to-end tests of the client over the reqwest transport.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use docbase_application::{ApiError, ExecutionContext, KnowledgeBaseClient, Outcome, PageLocation};
use docbase_domain::{Credentials, ServiceConfig};
use docbase_infrastructure::{InMemoryPageLocation, ReqwestTransport};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{
    body_json, body_string_contains, header, header_exists, header_regex, method, path,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EXPIRED_LOCATION: &str = "/auth/signin?why=Session%20expired%2C%20please%20sign-in%20again";

fn client_for(server: &MockServer) -> KnowledgeBaseClient<ReqwestTransport> {
    let transport = Arc::new(ReqwestTransport::new().expect("transport"));
    let config = ServiceConfig::default().with_endpoint_override(server.uri());
    KnowledgeBaseClient::new(transport, config)
}

fn credentials() -> Credentials {
    Credentials::new("acme", "secret-key")
}

#[tokio::test]
async fn test_list_collections_sends_headers_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/collections/list"))
        .and(header("api-key", "secret-key"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "namespace_name": "public" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "names": ["manuals"] })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .list_collections(&credentials())
        .await
        .expect("list should succeed");

    let names: Vec<String> = outcome
        .into_option()
        .expect("completed")
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["manuals".to_string()]);
}

#[tokio::test]
async fn test_unauthorized_navigates_page_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/apikey/list"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "detail": "expired" })))
        .expect(1)
        .mount(&server)
        .await;

    let page = Arc::new(InMemoryPageLocation::new("https://app.example.ai"));
    let client = client_for(&server)
        .with_context(ExecutionContext::interactive(Arc::clone(&page) as Arc<dyn PageLocation>));

    let outcome = client
        .list_api_keys(&credentials())
        .await
        .expect("401 is not an error");

    assert_eq!(outcome, Outcome::SessionExpired);
    assert_eq!(page.take().as_deref(), Some(EXPIRED_LOCATION));
}

#[tokio::test]
async fn test_local_page_adds_org_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/apikey/create"))
        .and(header("x-org-url", "acme"))
        .and(body_json(json!({ "name": "ci" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "api_key": "k-123" })))
        .expect(1)
        .mount(&server)
        .await;

    let page = Arc::new(InMemoryPageLocation::new("http://localhost:3000"));
    let client = client_for(&server).with_context(ExecutionContext::interactive(page));

    let outcome = client
        .create_api_key(&credentials(), "ci")
        .await
        .expect("create should succeed");

    assert_eq!(outcome, Outcome::Completed(json!({ "api_key": "k-123" })));
}

#[tokio::test]
async fn test_not_found_carries_status_and_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/collections/describe"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "detail": "Collection manuals not found" })),
        )
        .mount(&server)
        .await;

    let error = client_for(&server)
        .describe_collection(&credentials(), "manuals")
        .await
        .expect_err("404 should fail");

    assert_eq!(error.to_string(), "status: 404, error: Not Found");
    let ApiError::RequestFailed { status, detail, .. } = error else {
        panic!("expected a request failure");
    };
    assert_eq!(status, 404);
    assert_eq!(detail.as_deref(), Some("Collection manuals not found"));
}

#[tokio::test]
async fn test_upload_is_multipart() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/docs/add"))
        .and(header_exists("api-key"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains(r#"name="request""#))
        .and(body_string_contains(r#"filename="notes.txt""#))
        .and(body_string_contains("hello docbase"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .upload_document(&credentials(), "manuals", "notes.txt", b"hello docbase".to_vec())
        .await
        .expect("upload should succeed");

    assert_eq!(outcome, Outcome::Completed(json!({})));
}

#[tokio::test]
async fn test_ask_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/docs/ask"))
        .and(body_json(json!({
            "namespace_name": "public",
            "collection_name": "manuals",
            "question": "Which cable?",
            "conversation_id": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "The blue one.",
            "refs": [{ "doc_name": "guide.pdf", "page_num": 3, "sample_text": "blue" }],
            "conversation_id": "conv-9",
            "request_id": "req-9"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let answer = client_for(&server)
        .ask(&credentials(), "manuals", "Which cable?", &[], None)
        .await
        .expect("ask should succeed")
        .into_option()
        .expect("completed");

    assert_eq!(answer.answer, "The blue one.");
    assert_eq!(answer.conversation_id, "conv-9");
    assert_eq!(answer.cited_documents(), vec!["guide.pdf"]);
}
