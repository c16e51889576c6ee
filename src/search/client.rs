//! GitHub repository search client.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, Url};
use std::time::Instant;

use crate::config::SearchConfig;

use super::error::SearchError;
use super::repo::{Repo, SearchResponse};

const SEARCH_PATH: &str = "/search/repositories";
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Something that can search repositories by free-text query.
#[async_trait]
pub trait RepoSearch: Send + Sync {
    /// Search for repositories matching `query`.
    ///
    /// One request per call. No retries, no pagination.
    async fn search(&self, query: &str) -> Result<Vec<Repo>, SearchError>;
}

/// Client for the GitHub `search/repositories` endpoint.
pub struct GithubClient {
    client: Client,
    base_url: String,
    search_url: Url,
    user_agent: String,
}

impl GithubClient {
    /// Create a client from config. The underlying connection pool keeps no
    /// cookies and no response cache.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(SearchError::Client)?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        let endpoint = format!("{}{}", base_url, SEARCH_PATH);
        let search_url = Url::parse(&endpoint).map_err(|e| SearchError::InvalidUrl {
            url: endpoint.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            search_url,
            user_agent: config.user_agent.clone(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RepoSearch for GithubClient {
    async fn search(&self, query: &str) -> Result<Vec<Repo>, SearchError> {
        let mut url = self.search_url.clone();
        url.query_pairs_mut().append_pair("q", query);

        tracing::debug!(url = %url, query = %query, "Sending search request");

        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, GITHUB_JSON)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(SearchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        let envelope: SearchResponse = serde_json::from_slice(&body)?;

        tracing::info!(
            query = %query,
            results = envelope.items.len(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Search completed"
        );

        Ok(envelope.items)
    }
}
