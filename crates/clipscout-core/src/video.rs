use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Placeholder used when a text field cannot be recovered from a search hit.
pub const UNKNOWN: &str = "未知";

/// A short video discovered through search, normalized for reporting.
///
/// Built once per accepted search hit; the extraction engine never updates a
/// record after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Platform the caller searched; never inferred from the hit.
    pub platform: Platform,
    /// Title with URLs, markup, entities and one leading bracket decoration removed.
    pub title: String,
    /// Canonical URL (query string stripped), unique within one extraction run.
    pub url: String,
    /// Description text, entity-unescaped and trimmed. May be empty.
    pub text: String,
    /// Author handle, or [`UNKNOWN`] when absent and unrecoverable.
    pub author: String,
    pub play_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub share_count: u64,
    /// Publish time exactly as the source reported it, trimmed. Empty when absent.
    pub publish_time: String,
    /// Ordered, de-duplicated tags, each longer than one character.
    pub tags: Vec<String>,
}

impl VideoRecord {
    /// Returns `true` when the author could not be determined.
    #[must_use]
    pub fn has_unknown_author(&self) -> bool {
        self.author.is_empty() || self.author == UNKNOWN
    }

    /// Sum of all engagement counters, saturating on overflow.
    #[must_use]
    pub fn total_engagement(&self) -> u64 {
        self.like_count
            .saturating_add(self.comment_count)
            .saturating_add(self.share_count)
    }
}
