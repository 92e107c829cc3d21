//! Website crawl types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Progress of a crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum CrawlStatus {
    /// Pages are still being fetched
    Running,
    /// Every page was fetched; the crawl can be indexed
    Succeeded,
    /// The crawl stopped with an error
    Failed,
}

impl CrawlStatus {
    /// Returns true once the crawl will not change any more.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Running)
    }
}

impl TryFrom<i64> for CrawlStatus {
    type Error = DomainError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Running),
            2 => Ok(Self::Succeeded),
            3 => Ok(Self::Failed),
            other => Err(DomainError::UnknownCrawlStatus(other)),
        }
    }
}

impl From<CrawlStatus> for i64 {
    fn from(status: CrawlStatus) -> Self {
        match status {
            CrawlStatus::Running => 1,
            CrawlStatus::Succeeded => 2,
            CrawlStatus::Failed => 3,
        }
    }
}

/// What was fetched from one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageStats {
    /// Characters of text extracted
    #[serde(default, deserialize_with = "crate::serde_util::null_as_default")]
    pub char_count: u64,
    /// Error code when the page could not be fetched
    #[serde(default)]
    pub error_code: Option<String>,
    /// Error message when the page could not be fetched
    #[serde(default)]
    pub error_msg: Option<String>,
}

/// State of a crawl as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlReport {
    /// Page the crawl started from
    #[serde(default, deserialize_with = "crate::serde_util::null_as_default")]
    pub root_url: String,
    /// Creation time, in seconds since the Unix epoch
    #[serde(default, deserialize_with = "crate::serde_util::null_as_default")]
    pub created_on: i64,
    /// Page limit of the crawl
    #[serde(default, deserialize_with = "crate::serde_util::null_as_default")]
    pub max_pages: u32,
    /// Current status
    pub crawl_status: CrawlStatus,
    /// Per-page results keyed by URL; empty while nothing was fetched
    #[serde(default, deserialize_with = "crate::serde_util::null_as_default")]
    pub crawl_result: BTreeMap<String, PageStats>,
}

impl CrawlReport {
    /// Returns the URLs of the pages that failed, in URL order.
    #[must_use]
    pub fn failed_pages(&self) -> Vec<&str> {
        self.crawl_result
            .iter()
            .filter(|(_, stats)| stats.error_code.is_some())
            .map(|(url, _)| url.as_str())
            .collect()
    }
}
