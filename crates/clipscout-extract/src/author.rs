//! Author recovery for hits that arrive without one.

use std::sync::LazyLock;

use regex::Regex;

/// Author rules in priority order. The first rule with a non-empty capture wins.
static AUTHOR_RULES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("mention", r"@(\w+)"),
        ("cjk_bracket", r"【(.+?)】"),
        ("corner_bracket", r"「(.+?)」"),
        ("author_label", r"作者[：:]\s*(.+?)\s"),
        ("by_label", r"by\s+(.+?)\s"),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(pattern).expect("valid author regex")))
    .collect()
});

/// Infers an author handle from combined title and description text.
///
/// Returns `None` when no rule yields a non-empty capture; callers keep
/// whatever author they already had.
#[must_use]
pub fn infer_author(text: &str) -> Option<String> {
    AUTHOR_RULES.iter().find_map(|(rule, re)| {
        let candidate = re.captures(text)?.get(1)?.as_str().trim();
        if candidate.is_empty() {
            return None;
        }
        tracing::trace!(rule, author = candidate, "inferred author");
        Some(candidate.to_owned())
    })
}
