//! Website crawl operations
//!
//! A crawl fetches the pages under a root URL into a staging area. Once it
//! has succeeded, indexing it adds the fetched pages to the collection.

use docbase_domain::{CrawlReport, Credentials, PUBLIC_NAMESPACE, serde_util::null_as_default};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{KnowledgeBaseClient, decode_reply};
use crate::error::{ApiError, ApiResult};
use crate::outcome::Outcome;
use crate::ports::HttpTransport;

#[derive(Serialize)]
struct CreateCrawlRequest<'a> {
    namespace_name: &'a str,
    collection_name: &'a str,
    root_url: &'a str,
    max_urls_to_crawl: u32,
}

#[derive(Serialize)]
struct CrawlRequest<'a> {
    namespace_name: &'a str,
    collection_name: &'a str,
    crawl_id: &'a str,
}

impl<'a> CrawlRequest<'a> {
    const fn public(collection_name: &'a str, crawl_id: &'a str) -> Self {
        Self {
            namespace_name: PUBLIC_NAMESPACE,
            collection_name,
            crawl_id,
        }
    }
}

#[derive(Default, Deserialize)]
struct CreateCrawlReply {
    #[serde(default, deserialize_with = "null_as_default")]
    crawl_id: String,
}

impl<T: HttpTransport> KnowledgeBaseClient<T> {
    /// Starts crawling `root_url` into a collection and returns the crawl id.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is empty, the request fails or the
    /// reply is malformed.
    pub async fn create_crawl(
        &self,
        credentials: &Credentials,
        collection_name: &str,
        root_url: &str,
        max_urls_to_crawl: u32,
    ) -> ApiResult<Outcome<String>> {
        let body = CreateCrawlRequest {
            namespace_name: PUBLIC_NAMESPACE,
            collection_name,
            root_url,
            max_urls_to_crawl,
        };
        let outcome = self
            .pipeline()
            .send(credentials, "/docs/create_crawl", &body)
            .await?;

        Ok(decode_reply::<CreateCrawlReply>(outcome)?.map(|reply| reply.crawl_id))
    }

    /// Reports the status and per-page results of a crawl.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is empty, the request fails or the
    /// reply carries no valid status.
    pub async fn get_crawl(
        &self,
        credentials: &Credentials,
        collection_name: &str,
        crawl_id: &str,
    ) -> ApiResult<Outcome<CrawlReport>> {
        let outcome = self
            .pipeline()
            .send(
                credentials,
                "/docs/get_crawl",
                &CrawlRequest::public(collection_name, crawl_id),
            )
            .await?;

        outcome.try_map(|reply| serde_json::from_value(reply).map_err(ApiError::Decode))
    }

    /// Adds the pages of a finished crawl to the collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is empty or the request fails.
    pub async fn index_crawl(
        &self,
        credentials: &Credentials,
        collection_name: &str,
        crawl_id: &str,
    ) -> ApiResult<Outcome<Value>> {
        self.pipeline()
            .send(
                credentials,
                "/docs/index_crawl",
                &CrawlRequest::public(collection_name, crawl_id),
            )
            .await
    }
}
