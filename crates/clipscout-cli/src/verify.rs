//! `verify` command handler.

use clipscout_core::AppConfig;
use clipscout_extract::CdnVerifier;

/// Verifies each URL in turn and prints `valid` or `invalid` next to it.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be constructed, or if any
/// URL fails verification so scripts can rely on the exit status.
pub(crate) async fn run_verify(config: &AppConfig, urls: &[String]) -> anyhow::Result<()> {
    let verifier = CdnVerifier::new(config.verify_timeout_secs)
        .map_err(|e| anyhow::anyhow!("failed to build verification client: {e}"))?;

    let mut invalid = 0usize;
    for url in urls {
        let valid = verifier.verify_video_url(url).await;
        if !valid {
            invalid += 1;
        }
        println!("{}\t{url}", if valid { "valid" } else { "invalid" });
    }

    anyhow::ensure!(invalid == 0, "{invalid} of {} urls failed verification", urls.len());
    Ok(())
}
