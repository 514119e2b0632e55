//! Remote verification of direct CDN media URLs.

use std::time::Duration;

use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, CONNECTION, CONTENT_TYPE, ORIGIN, RANGE, REFERER, USER_AGENT,
};
use reqwest::{Client, StatusCode};

use crate::error::ExtractError;

/// Link-sharing domains that need a login to fetch; accepted without a request.
pub const TRUSTED_SHARE_DOMAINS: &[&str] = &["xiaohongshu.com", "xhslink.com"];

/// Douyin video CDN hosts that may be probed.
pub const DOUYIN_CDN_HOSTS: &[&str] = &[
    "v3-web.douyinvod.com",
    "v9-web.douyinvod.com",
    "v26-web.douyinvod.com",
    "v3.douyinvod.com",
    "v9.douyinvod.com",
    "v26.douyinvod.com",
];

const MOBILE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 13_2_3 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/604.1";

/// Checks that a direct media URL actually serves video bytes.
///
/// Only hosts in the CDN whitelist are probed. The probe is a `HEAD` request
/// asking for the first few bytes; every failure mode collapses to `false`.
#[derive(Debug, Clone)]
pub struct CdnVerifier {
    client: Client,
    cdn_hosts: Vec<String>,
}

impl CdnVerifier {
    /// Builds a verifier with the given request timeout and the default
    /// [`DOUYIN_CDN_HOSTS`] whitelist.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Http`] if the HTTP client cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, ExtractError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .build()?;
        Ok(Self {
            client,
            cdn_hosts: DOUYIN_CDN_HOSTS.iter().map(|h| (*h).to_owned()).collect(),
        })
    }

    /// Replaces the probe whitelist.
    #[must_use]
    pub fn with_cdn_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cdn_hosts = hosts.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` if `url` is a trusted share link or a whitelisted CDN URL
    /// answering `200`/`206` with a video or octet-stream content type.
    pub async fn verify_video_url(&self, url: &str) -> bool {
        let url = url.trim();
        if url.is_empty() {
            return false;
        }

        let Some(host) = host_of(url) else {
            tracing::warn!(url, "could not parse video url");
            return false;
        };

        if TRUSTED_SHARE_DOMAINS
            .iter()
            .any(|domain| host_matches(&host, domain))
        {
            return true;
        }

        if !self.cdn_hosts.iter().any(|cdn| host_matches(&host, cdn)) {
            tracing::warn!(url, host = %host, "video url host is not a known CDN");
            return false;
        }

        match self.probe(url).await {
            Ok(valid) => valid,
            Err(e) => {
                tracing::error!(url, error = %e, "error verifying video url");
                false
            }
        }
    }

    async fn probe(&self, url: &str) -> Result<bool, ExtractError> {
        let response = self
            .client
            .head(url)
            .headers(probe_headers())
            .send()
            .await?;
        let status = response.status();

        if status != StatusCode::OK && status != StatusCode::PARTIAL_CONTENT {
            tracing::warn!(url, status = status.as_u16(), "video url returned unexpected status");
            return Ok(false);
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_lowercase();

        if content_type.contains("video") || content_type.contains("application/octet-stream") {
            tracing::info!(url, "valid video url");
            Ok(true)
        } else {
            tracing::warn!(url, content_type = %content_type, "video url has non-video content type");
            Ok(false)
        }
    }
}

fn probe_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(MOBILE_UA));
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(RANGE, HeaderValue::from_static("bytes=0-10"));
    headers.insert(REFERER, HeaderValue::from_static("https://www.douyin.com/"));
    headers.insert(ORIGIN, HeaderValue::from_static("https://www.douyin.com"));
    headers
}

fn host_of(url: &str) -> Option<String> {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_lowercase))
}

/// `host` is `domain` itself or one of its subdomains.
fn host_matches(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}
