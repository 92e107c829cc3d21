//! API key operations

use docbase_domain::{ApiKey, Credentials, serde_util::null_as_default};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{KnowledgeBaseClient, decode_reply};
use crate::error::ApiResult;
use crate::outcome::Outcome;
use crate::ports::HttpTransport;

use super::EmptyRequest;

#[derive(Serialize)]
struct ApiKeyRequest<'a> {
    name: &'a str,
}

#[derive(Deserialize)]
struct ApiKeyRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    masked_api_key: String,
}

#[derive(Default, Deserialize)]
struct ListApiKeysReply {
    api_keys: Option<Vec<ApiKeyRecord>>,
}

impl<T: HttpTransport> KnowledgeBaseClient<T> {
    /// Creates an API key.
    ///
    /// The reply is returned unchanged; it is the only place the unmasked
    /// key value ever appears.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is empty or the request fails.
    pub async fn create_api_key(
        &self,
        credentials: &Credentials,
        name: &str,
    ) -> ApiResult<Outcome<Value>> {
        self.pipeline()
            .send(credentials, "/apikey/create", &ApiKeyRequest { name })
            .await
    }

    /// Deletes an API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is empty or the request fails.
    pub async fn delete_api_key(
        &self,
        credentials: &Credentials,
        name: &str,
    ) -> ApiResult<Outcome<Value>> {
        self.pipeline()
            .send(credentials, "/apikey/delete", &ApiKeyRequest { name })
            .await
    }

    /// Lists the API keys of the account, with masked values.
    ///
    /// A null reply yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is empty, the request fails or the
    /// reply is malformed.
    pub async fn list_api_keys(&self, credentials: &Credentials) -> ApiResult<Outcome<Vec<ApiKey>>> {
        let outcome = self
            .pipeline()
            .send(credentials, "/apikey/list", &EmptyRequest {})
            .await?;

        Ok(decode_reply::<ListApiKeysReply>(outcome)?.map(|reply| {
            reply
                .api_keys
                .unwrap_or_default()
                .into_iter()
                .map(|record| ApiKey::new(record.name, record.masked_api_key))
                .collect()
        }))
    }
}
