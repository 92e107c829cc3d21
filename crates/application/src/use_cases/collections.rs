//! Collection operations

use docbase_domain::{
    ChatAttributes, Collection, CollectionDescription, Credentials, PUBLIC_NAMESPACE,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{KnowledgeBaseClient, decode_reply};
use crate::error::ApiResult;
use crate::outcome::Outcome;
use crate::ports::HttpTransport;

use super::CollectionRequest;

#[derive(Serialize)]
struct ConfigureCollectionRequest<'a> {
    #[serde(flatten)]
    collection: CollectionRequest<'a>,
    public_read: bool,
}

#[derive(Serialize)]
struct ConfigureChatRequest<'a> {
    #[serde(flatten)]
    collection: CollectionRequest<'a>,
    chat_attributes: &'a ChatAttributes,
}

#[derive(Serialize)]
struct NamespaceRequest<'a> {
    namespace_name: &'a str,
}

#[derive(Default, Deserialize)]
struct ListCollectionsReply {
    names: Option<Vec<String>>,
}

#[derive(Default, Deserialize)]
struct DescribeCollectionReply {
    description: Option<String>,
    public_read: Option<bool>,
    chat_attributes: Option<ChatAttributes>,
}

impl<T: HttpTransport> KnowledgeBaseClient<T> {
    /// Creates a private collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is empty or the request fails.
    pub async fn create_collection(
        &self,
        credentials: &Credentials,
        collection_name: &str,
    ) -> ApiResult<Outcome<Value>> {
        let body = ConfigureCollectionRequest {
            collection: CollectionRequest::public(collection_name),
            public_read: false,
        };
        self.pipeline()
            .send(credentials, "/collections/create", &body)
            .await
    }

    /// Deletes a collection and its documents.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is empty or the request fails.
    pub async fn delete_collection(
        &self,
        credentials: &Credentials,
        collection_name: &str,
    ) -> ApiResult<Outcome<Value>> {
        self.pipeline()
            .send(
                credentials,
                "/collections/delete",
                &CollectionRequest::public(collection_name),
            )
            .await
    }

    /// Lists the collections of the public namespace, by name only.
    ///
    /// A null reply yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is empty, the request fails or the
    /// reply is malformed.
    pub async fn list_collections(
        &self,
        credentials: &Credentials,
    ) -> ApiResult<Outcome<Vec<Collection>>> {
        let body = NamespaceRequest {
            namespace_name: PUBLIC_NAMESPACE,
        };
        let outcome = self
            .pipeline()
            .send(credentials, "/collections/list", &body)
            .await?;

        Ok(decode_reply::<ListCollectionsReply>(outcome)?.map(|reply| {
            reply
                .names
                .unwrap_or_default()
                .into_iter()
                .map(Collection::named)
                .collect()
        }))
    }

    /// Describes a collection, filling unset attributes with their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is empty, the request fails or the
    /// reply is malformed.
    pub async fn describe_collection(
        &self,
        credentials: &Credentials,
        collection_name: &str,
    ) -> ApiResult<Outcome<CollectionDescription>> {
        let outcome = self
            .pipeline()
            .send(
                credentials,
                "/collections/describe",
                &CollectionRequest::public(collection_name),
            )
            .await?;

        Ok(decode_reply::<DescribeCollectionReply>(outcome)?.map(|reply| {
            let attributes = reply.chat_attributes.unwrap_or_default();
            CollectionDescription {
                collection: Collection {
                    name: collection_name.to_string(),
                    description: Some(reply.description.unwrap_or_default()),
                    public_read: Some(reply.public_read.unwrap_or(false)),
                    persona: Some(attributes.persona_or_default().to_string()),
                    negative_response: Some(attributes.negative_response_or_default().to_string()),
                },
            }
        }))
    }

    /// Sets the persona and negative response of a collection.
    ///
    /// Unset attributes are sent as `null`.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is empty or the request fails.
    pub async fn configure_chat(
        &self,
        credentials: &Credentials,
        collection_name: &str,
        attributes: &ChatAttributes,
    ) -> ApiResult<Outcome<Value>> {
        let body = ConfigureChatRequest {
            collection: CollectionRequest::public(collection_name),
            chat_attributes: attributes,
        };
        self.pipeline()
            .send(credentials, "/docs/configure_chat", &body)
            .await
    }

    /// Makes a collection publicly readable, or private again.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is empty or the request fails.
    pub async fn share_collection(
        &self,
        credentials: &Credentials,
        collection_name: &str,
        public_read: bool,
    ) -> ApiResult<Outcome<Value>> {
        let body = ConfigureCollectionRequest {
            collection: CollectionRequest::public(collection_name),
            public_read,
        };
        self.pipeline()
            .send(credentials, "/collections/configure", &body)
            .await
    }
}
