//! Normalization from raw search hits to [`clipscout_core::VideoRecord`].
//!
//! Field-level parsing is delegated to [`crate::count`], [`crate::text`],
//! [`crate::tags`] and [`crate::author`]; URL admission to
//! [`crate::gatekeeper`]. This module owns the order in which they run and
//! the per-run result cap.

use clipscout_core::{AppConfig, Platform, VideoRecord, UNKNOWN};

use crate::author::infer_author;
use crate::count::parse_count;
use crate::gatekeeper::UrlGatekeeper;
use crate::tags::extract_tags;
use crate::text::{clean_title, unescape_entities};
use crate::types::RawHit;

/// Default cap on records per extraction run.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Characters of the description's first line used as a fallback title.
const FALLBACK_TITLE_CHARS: usize = 100;

/// Knobs for one extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractConfig {
    pub max_results: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl ExtractConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            max_results: config.max_results,
        }
    }
}

/// Builds a [`VideoRecord`] from a hit whose URL has already been admitted.
///
/// `canonical_url` is the gatekeeper's canonical form of `hit.url`.
#[must_use]
pub fn normalize_hit(hit: RawHit, platform: Platform, canonical_url: String) -> VideoRecord {
    let play_count = parse_count(hit.views.as_ref());
    let like_count = parse_count(hit.likes.as_ref());
    let comment_count = parse_count(hit.comments.as_ref());
    let share_count = parse_count(hit.shares.as_ref());

    let mut title = unescape_entities(hit.title.as_deref().map_or(UNKNOWN, str::trim))
        .trim()
        .to_owned();
    let text = hit
        .text
        .as_deref()
        .map(|t| unescape_entities(t.trim()).trim().to_owned())
        .unwrap_or_default();
    let mut author = unescape_entities(hit.author.as_deref().map_or(UNKNOWN, str::trim))
        .trim()
        .to_owned();
    let publish_time = hit
        .published
        .as_deref()
        .map(|p| p.trim().to_owned())
        .unwrap_or_default();

    if is_missing(&title) {
        if let Some(fallback) = fallback_title(&text) {
            title = fallback;
        }
    }

    let combined = format!("{title} {text}");

    if is_missing(&author) {
        author = infer_author(&combined).unwrap_or_else(|| UNKNOWN.to_owned());
    }

    let tags = extract_tags(&combined);

    VideoRecord {
        platform,
        title: clean_title(&title),
        url: canonical_url,
        text,
        author,
        play_count,
        like_count,
        comment_count,
        share_count,
        publish_time,
        tags,
    }
}

fn is_missing(value: &str) -> bool {
    value.is_empty() || value == UNKNOWN
}

/// First line of the description, cut to [`FALLBACK_TITLE_CHARS`] characters.
fn fallback_title(text: &str) -> Option<String> {
    let first_line: String = text
        .split('\n')
        .next()
        .unwrap_or_default()
        .chars()
        .take(FALLBACK_TITLE_CHARS)
        .collect();
    (!first_line.is_empty()).then_some(first_line)
}

/// One extraction run: a gatekeeper, the records accepted so far, and the cap.
///
/// Hits are offered one at a time. Once the cap is reached every further hit
/// is ignored without being evaluated, so its URL is not marked as seen.
#[derive(Debug)]
pub struct ExtractionRun {
    gatekeeper: UrlGatekeeper,
    max_results: usize,
    records: Vec<VideoRecord>,
}

impl ExtractionRun {
    #[must_use]
    pub fn new(platform: Platform, config: ExtractConfig) -> Self {
        Self::with_gatekeeper(UrlGatekeeper::new(platform), config)
    }

    #[must_use]
    pub fn with_gatekeeper(gatekeeper: UrlGatekeeper, config: ExtractConfig) -> Self {
        Self {
            gatekeeper,
            max_results: config.max_results,
            records: Vec::new(),
        }
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.gatekeeper.platform()
    }

    /// `true` once the run holds `max_results` records.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.records.len() >= self.max_results
    }

    /// Offers one hit to the run. Returns `true` if it produced a record.
    pub fn offer(&mut self, hit: RawHit) -> bool {
        if self.is_full() {
            return false;
        }

        let Some(url) = hit.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) else {
            tracing::debug!(platform = %self.platform(), "skipping hit without url");
            return false;
        };

        let Some(canonical) = self.gatekeeper.admit(url) else {
            return false;
        };

        let record = normalize_hit(hit, self.platform(), canonical);
        tracing::info!(
            platform = %record.platform,
            title = %record.title,
            url = %record.url,
            "found video"
        );
        self.records.push(record);
        true
    }

    /// Offers hits in order until the run is full or the hits run out.
    pub fn offer_all<I>(&mut self, hits: I)
    where
        I: IntoIterator<Item = RawHit>,
    {
        for hit in hits {
            if self.is_full() {
                break;
            }
            self.offer(hit);
        }
    }

    #[must_use]
    pub fn records(&self) -> &[VideoRecord] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<VideoRecord> {
        self.records
    }
}

/// Runs a complete extraction over `hits` for `platform`.
#[must_use]
pub fn extract<I>(platform: Platform, hits: I, config: ExtractConfig) -> Vec<VideoRecord>
where
    I: IntoIterator<Item = RawHit>,
{
    let mut run = ExtractionRun::new(platform, config);
    run.offer_all(hits);
    let records = run.into_records();
    tracing::info!(platform = %platform, count = records.len(), "extraction finished");
    records
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
