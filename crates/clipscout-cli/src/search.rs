//! `search` command handler.
//!
//! A single-platform search propagates its error. With `--platform all` every
//! registered platform is searched concurrently and a failing platform is
//! logged and skipped so one bad provider response does not abort the run.

use std::str::FromStr;

use clipscout_core::{AppConfig, Platform, PlatformError, VideoRecord};
use clipscout_extract::{format_results, ExtractConfig, SearcherRegistry};
use futures::future::join_all;

/// Resolves the `--platform` argument: a platform name or `all`.
pub(crate) fn resolve_platforms(arg: &str) -> Result<Vec<Platform>, PlatformError> {
    if arg.trim().eq_ignore_ascii_case("all") {
        Ok(Platform::ALL.to_vec())
    } else {
        Platform::from_str(arg).map(|p| vec![p])
    }
}

/// Builds the extraction settings for this run, applying the CLI override.
pub(crate) fn extract_config(
    config: &AppConfig,
    max_results: Option<usize>,
) -> anyhow::Result<ExtractConfig> {
    let mut extract = ExtractConfig::from_app_config(config);
    if let Some(n) = max_results {
        anyhow::ensure!(n > 0, "--max-results must be at least 1");
        extract.max_results = n;
    }
    Ok(extract)
}

/// Renders per-platform results as text, one block per platform with results.
pub(crate) fn render_text(results: &[(Platform, Vec<VideoRecord>)]) -> String {
    if let [(_, records)] = results {
        return format_results(records);
    }

    let blocks: Vec<String> = results
        .iter()
        .filter(|(_, records)| !records.is_empty())
        .map(|(platform, records)| format!("=== {platform} ===\n{}", format_results(records)))
        .collect();

    if blocks.is_empty() {
        format_results(&[])
    } else {
        blocks.join("\n\n")
    }
}

pub(crate) async fn run_search(
    config: &AppConfig,
    keyword: &str,
    platform_arg: &str,
    max_results: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let keyword = keyword.trim();
    anyhow::ensure!(!keyword.is_empty(), "keyword must not be empty");

    let platforms = resolve_platforms(platform_arg)?;
    let extract = extract_config(config, max_results)?;
    let registry = SearcherRegistry::with_exa(config)
        .map_err(|e| anyhow::anyhow!("failed to build search client: {e}"))?;

    tracing::info!(keyword, platforms = platforms.len(), "starting search");

    let results: Vec<(Platform, Vec<VideoRecord>)> = if let [platform] = platforms.as_slice() {
        let records = registry.collect(*platform, keyword, extract).await?;
        vec![(*platform, records)]
    } else {
        let searches = platforms.iter().map(|&platform| {
            let registry = &registry;
            async move { (platform, registry.collect(platform, keyword, extract).await) }
        });

        join_all(searches)
            .await
            .into_iter()
            .filter_map(|(platform, outcome)| match outcome {
                Ok(records) => Some((platform, records)),
                Err(e) => {
                    tracing::warn!(platform = %platform, error = %e, "platform search failed, skipping");
                    None
                }
            })
            .collect()
    };

    if json {
        let records: Vec<&VideoRecord> = results.iter().flat_map(|(_, r)| r).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        println!("{}", render_text(&results));
    }

    Ok(())
}
