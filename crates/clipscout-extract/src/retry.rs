//! Exponential backoff for search-provider requests.
//!
//! Only transient failures are retried: rate limiting, transport errors and
//! 5xx responses. Credential problems and malformed bodies fail immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::ExtractError;

fn is_retriable(err: &ExtractError) -> bool {
    match err {
        ExtractError::RateLimited { .. } | ExtractError::Http(_) => true,
        ExtractError::UnexpectedStatus { status, .. } => *status >= 500,
        _ => false,
    }
}

/// Executes `operation`, retrying transient errors up to `max_retries` more
/// times. The wait before retry `n` (1-based) is `backoff_base_secs * 2^(n-1)`.
///
/// Non-retriable errors and the last error after exhausting retries are
/// returned as-is.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, ExtractError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ExtractError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        if !is_retriable(&err) || attempt >= max_retries {
            return Err(err);
        }

        let delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %err,
            "transient search error, retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
