//! Document and question-answering operations

use docbase_domain::{
    AskResult, Credentials, HistoryMessage, PUBLIC_NAMESPACE, Question,
    request::UploadForm, serde_util::null_as_default,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{KnowledgeBaseClient, decode_reply};
use crate::error::{ApiError, ApiResult};
use crate::outcome::Outcome;
use crate::ports::HttpTransport;

use super::CollectionRequest;

#[derive(Serialize)]
struct DocumentRequest<'a> {
    namespace_name: &'a str,
    collection_name: &'a str,
    doc_name: &'a str,
}

#[derive(Serialize)]
struct AskRequest<'a> {
    namespace_name: &'a str,
    collection_name: &'a str,
    #[serde(flatten)]
    question: &'a Question,
}

#[derive(Deserialize)]
struct DocumentRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
}

#[derive(Default, Deserialize)]
struct ListDocumentsReply {
    documents: Option<Vec<DocumentRecord>>,
    // Older servers reply with bare names.
    doc_names: Option<Vec<String>>,
}

#[derive(Default, Deserialize)]
struct SummaryReply {
    summary: Option<String>,
}

impl<T: HttpTransport> KnowledgeBaseClient<T> {
    /// Deletes a document from a collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is empty or the request fails.
    pub async fn delete_document(
        &self,
        credentials: &Credentials,
        collection_name: &str,
        doc_name: &str,
    ) -> ApiResult<Outcome<Value>> {
        let body = DocumentRequest {
            namespace_name: PUBLIC_NAMESPACE,
            collection_name,
            doc_name,
        };
        self.pipeline()
            .send(credentials, "/docs/delete", &body)
            .await
    }

    /// Lists the names of the documents in a collection.
    ///
    /// A null reply yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is empty, the request fails or the
    /// reply is malformed.
    pub async fn list_documents(
        &self,
        credentials: &Credentials,
        collection_name: &str,
    ) -> ApiResult<Outcome<Vec<String>>> {
        let body = CollectionRequest::public(collection_name);
        let outcome = self.pipeline().send(credentials, "/docs/list", &body).await?;

        Ok(decode_reply::<ListDocumentsReply>(outcome)?.map(|reply| match reply.documents {
            Some(documents) => documents.into_iter().map(|doc| doc.name).collect(),
            None => reply.doc_names.unwrap_or_default(),
        }))
    }

    /// Asks a question against a collection.
    ///
    /// `history` is only sent when it is not empty. Pass the
    /// `conversation_id` of an earlier answer to continue its conversation.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is empty, the request fails or the
    /// reply is malformed.
    pub async fn ask(
        &self,
        credentials: &Credentials,
        collection_name: &str,
        question: &str,
        history: &[HistoryMessage],
        conversation_id: Option<&str>,
    ) -> ApiResult<Outcome<AskResult>> {
        let mut question = Question::new(question).with_history(history.to_vec());
        question.conversation_id = conversation_id.map(str::to_string);
        self.ask_question(credentials, collection_name, &question).await
    }

    /// Asks a question with explicit retrieval options, such as `top_k` or
    /// a single-document scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is empty, the request fails or the
    /// reply is malformed.
    pub async fn ask_question(
        &self,
        credentials: &Credentials,
        collection_name: &str,
        question: &Question,
    ) -> ApiResult<Outcome<AskResult>> {
        let body = AskRequest {
            namespace_name: PUBLIC_NAMESPACE,
            collection_name,
            question,
        };
        let outcome = self.pipeline().send(credentials, "/docs/ask", &body).await?;
        decode_reply(outcome)
    }

    /// Uploads a file into a collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is empty or the request fails.
    pub async fn upload_document(
        &self,
        credentials: &Credentials,
        collection_name: &str,
        file_name: &str,
        content: Vec<u8>,
    ) -> ApiResult<Outcome<Value>> {
        let request = CollectionRequest::public(collection_name);
        let form = UploadForm {
            request_json: serde_json::to_string(&request).map_err(ApiError::Encode)?,
            file_name: file_name.to_string(),
            content,
        };
        self.pipeline()
            .send_upload(credentials, "/docs/add", form)
            .await
    }

    /// Returns a summary of one document.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is empty, the request fails or the
    /// reply is malformed.
    pub async fn summarize_document(
        &self,
        credentials: &Credentials,
        collection_name: &str,
        doc_name: &str,
    ) -> ApiResult<Outcome<String>> {
        let body = DocumentRequest {
            namespace_name: PUBLIC_NAMESPACE,
            collection_name,
            doc_name,
        };
        let outcome = self
            .pipeline()
            .send(credentials, "/docs/summary", &body)
            .await?;

        Ok(decode_reply::<SummaryReply>(outcome)?.map(|reply| reply.summary.unwrap_or_default()))
    }
}
