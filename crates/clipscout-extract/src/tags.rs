//! Tag mining from free text.
//!
//! Candidates come from three sources, collected in this order:
//! 1. hashtags (`#搞笑`, terminated by whitespace, end of text, or the next `#`)
//! 2. `【...】` spans
//! 3. `[...]` spans
//!
//! Each candidate is then reduced to word characters, whitespace and CJK
//! ideographs, and anything of one character or less is dropped.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

// A greedy run of non-space, non-`#` characters ends exactly where the next
// whitespace, `#` or end of text begins.
static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([^#\s]+)").expect("valid hashtag regex"));

static HASHTAG_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid hashtag url regex"));

static NON_WORD_ONLY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\W_]+$").expect("valid non-word regex"));

static CJK_BRACKET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"【([^】]+)】").expect("valid cjk bracket regex"));

static SQUARE_BRACKET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").expect("valid square bracket regex"));

static DISALLOWED_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\w\s\x{4e00}-\x{9fff}]+").expect("valid disallowed chars regex")
});

/// Extracts de-duplicated tags from `text`, preserving first-seen order.
///
/// ```
/// use clipscout_extract::extract_tags;
/// assert_eq!(extract_tags("#猫 #狗 #猫 内容"), vec!["猫", "狗"]);
/// ```
#[must_use]
pub fn extract_tags(text: &str) -> Vec<String> {
    let mut candidates = hashtag_candidates(text);
    candidates.extend(bracket_candidates(&CJK_BRACKET_RE, text));
    candidates.extend(bracket_candidates(&SQUARE_BRACKET_RE, text));

    let mut seen = HashSet::new();
    candidates
        .iter()
        .filter_map(|candidate| clean_candidate(candidate))
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}

fn hashtag_candidates(text: &str) -> Vec<String> {
    HASHTAG_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let raw = caps.get(1)?.as_str();
            let tag = HASHTAG_URL_RE.replace_all(raw, "");
            if tag.is_empty() || NON_WORD_ONLY_RE.is_match(&tag) {
                None
            } else {
                Some(tag.into_owned())
            }
        })
        .collect()
}

fn bracket_candidates(re: &Regex, text: &str) -> Vec<String> {
    re.captures_iter(text)
        .filter_map(|caps| {
            let inner = caps.get(1)?.as_str().trim();
            (!inner.is_empty()).then(|| inner.to_owned())
        })
        .collect()
}

fn clean_candidate(candidate: &str) -> Option<String> {
    let stripped = DISALLOWED_CHARS_RE.replace_all(candidate, "");
    let trimmed = stripped.trim();
    (trimmed.chars().count() > 1).then(|| trimmed.to_owned())
}
