//! Exa web-search backed [`PlatformSearcher`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use clipscout_core::{AppConfig, Platform};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::queries::{build_queries, include_domains};
use super::PlatformSearcher;
use crate::error::ExtractError;
use crate::gatekeeper::{UrlGatekeeper, Verdict};
use crate::retry::retry_with_backoff;
use crate::types::RawHit;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    query: &'a str,
    num_results: u32,
    include_domains: &'a [&'a str],
    contents: SearchContents,
}

#[derive(Debug, Serialize)]
struct SearchContents {
    text: bool,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<RawHit>,
}

/// HTTP client for the Exa `/search` endpoint.
///
/// One client is shared by every platform's searcher. Transient failures
/// (429, 5xx, network errors) are retried with exponential backoff.
pub struct ExaClient {
    client: Client,
    base_url: String,
    api_key: String,
    results_per_query: u32,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl std::fmt::Debug for ExaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExaClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[redacted]")
            .field("results_per_query", &self.results_per_query)
            .finish_non_exhaustive()
    }
}

impl ExaClient {
    /// Builds a client from application configuration.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::MissingConfig`] if `EXA_API_KEY` is not set.
    /// - [`ExtractError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ExtractError> {
        let api_key = config
            .exa_api_key
            .clone()
            .ok_or_else(|| ExtractError::MissingConfig("EXA_API_KEY".to_owned()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: config.exa_base_url.trim_end_matches('/').to_owned(),
            api_key,
            results_per_query: config.search_results_per_query,
            max_retries: config.search_max_retries,
            backoff_base_secs: config.search_backoff_base_secs,
        })
    }

    /// Runs one search query restricted to `domains`.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::Unauthorized`] on HTTP 401/403 (not retried).
    /// - [`ExtractError::RateLimited`] on HTTP 429 after all retries.
    /// - [`ExtractError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`ExtractError::Http`] on network failure after all retries.
    /// - [`ExtractError::Deserialize`] if the body is not a search response.
    pub async fn search(&self, query: &str, domains: &[&str]) -> Result<Vec<RawHit>, ExtractError> {
        let url = format!("{}/search", self.base_url);
        let body = SearchRequest {
            query,
            num_results: self.results_per_query,
            include_domains: domains,
            contents: SearchContents { text: true },
        };

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            let body = &body;
            async move {
                let response = self
                    .client
                    .post(&url)
                    .header("x-api-key", &self.api_key)
                    .json(body)
                    .send()
                    .await?;
                let status = response.status();

                if status == reqwest::StatusCode::UNAUTHORIZED
                    || status == reqwest::StatusCode::FORBIDDEN
                {
                    return Err(ExtractError::Unauthorized {
                        status: status.as_u16(),
                    });
                }

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);
                    return Err(ExtractError::RateLimited { retry_after_secs });
                }

                if !status.is_success() {
                    return Err(ExtractError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                let text = response.text().await?;
                let parsed = serde_json::from_str::<SearchResponse>(&text).map_err(|e| {
                    ExtractError::Deserialize {
                        context: format!("search response for query \"{query}\""),
                        source: e,
                    }
                })?;

                Ok(parsed.results)
            }
        })
        .await
    }
}

/// Searches one platform by running its query templates against Exa.
///
/// Queries run in order until `max_hits` admissible video URLs have been
/// gathered or the templates run out. A failing query is logged and skipped;
/// only when every query fails is the last error returned.
#[derive(Debug, Clone)]
pub struct ExaSearcher {
    platform: Platform,
    client: Arc<ExaClient>,
}

impl ExaSearcher {
    #[must_use]
    pub fn new(platform: Platform, client: Arc<ExaClient>) -> Self {
        Self { platform, client }
    }
}

#[async_trait]
impl PlatformSearcher for ExaSearcher {
    fn platform(&self) -> Platform {
        self.platform
    }

    async fn search(&self, keyword: &str, max_hits: usize) -> Result<Vec<RawHit>, ExtractError> {
        let domains = include_domains(self.platform);
        // Counts admissible URLs only; the extraction run re-checks every hit
        // with its own gatekeeper.
        let mut budget = UrlGatekeeper::new(self.platform);
        let mut admissible = 0usize;
        let mut hits = Vec::new();
        let mut last_error = None;
        let mut succeeded = 0usize;

        for query in build_queries(self.platform, keyword) {
            if admissible >= max_hits {
                break;
            }

            tracing::debug!(platform = %self.platform, query = %query, "running search query");
            let batch = match self.client.search(&query, domains).await {
                Ok(batch) => batch,
                Err(e) => {
                    tracing::warn!(
                        platform = %self.platform,
                        query = %query,
                        error = %e,
                        "search query failed, skipping"
                    );
                    last_error = Some(e);
                    continue;
                }
            };
            succeeded += 1;

            admissible += batch
                .iter()
                .filter_map(|hit| hit.url.as_deref())
                .filter(|url| matches!(budget.evaluate(url), Verdict::Accepted(_)))
                .count();
            hits.extend(batch);
        }

        match last_error {
            Some(e) if succeeded == 0 => Err(e),
            _ => {
                tracing::debug!(
                    platform = %self.platform,
                    hits = hits.len(),
                    admissible,
                    "search finished"
                );
                Ok(hits)
            }
        }
    }
}
