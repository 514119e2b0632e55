use clipscout_core::Platform;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("search provider rejected credentials (HTTP {status})")]
    Unauthorized { status: u16 },

    #[error("rate limited by search provider (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("no searcher registered for platform {0}")]
    UnsupportedPlatform(Platform),

    #[error("missing configuration: {0}")]
    MissingConfig(String),
}
