//! URL admission for one extraction run.
//!
//! A [`UrlGatekeeper`] is created per run and per platform. It canonicalizes
//! every candidate URL, remembers it, and admits it only when it looks like a
//! genuine video page for that platform. Direct CDN media links can be checked
//! remotely with [`CdnVerifier`].

mod rules;
mod verify;

use std::collections::HashSet;

use clipscout_core::Platform;

pub use rules::{rules_for, UrlRules};
pub use verify::{CdnVerifier, DOUYIN_CDN_HOSTS, TRUSTED_SHARE_DOMAINS};

/// Outcome of evaluating one candidate URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Admitted; carries the canonical URL.
    Accepted(String),
    /// The canonical URL was already evaluated earlier in this run.
    Duplicate,
    /// Matched a deny pattern (checked before allow patterns).
    Denied(&'static str),
    /// Matched no allow pattern.
    NotVideo,
}

/// Strips the query string: everything from the first `?` onwards.
///
/// Fragments are left alone.
#[must_use]
pub fn canonicalize_url(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}

/// Per-run URL filter and de-duplicator for a single platform.
#[derive(Debug)]
pub struct UrlGatekeeper {
    platform: Platform,
    rules: UrlRules,
    seen: HashSet<String>,
}

impl UrlGatekeeper {
    /// Creates a gatekeeper using the built-in rules for `platform`.
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self::with_rules(platform, rules_for(platform))
    }

    #[must_use]
    pub fn with_rules(platform: Platform, rules: UrlRules) -> Self {
        Self {
            platform,
            rules,
            seen: HashSet::new(),
        }
    }

    /// Evaluates `url`, recording its canonical form as seen.
    ///
    /// The canonical URL is remembered on its first evaluation whatever the
    /// outcome, so a rejected URL is never evaluated twice in one run.
    pub fn evaluate(&mut self, url: &str) -> Verdict {
        let canonical = canonicalize_url(url.trim());

        if !self.seen.insert(canonical.to_owned()) {
            return Verdict::Duplicate;
        }

        if let Some(pattern) = self.rules.deny.iter().find(|p| canonical.contains(*p)) {
            return Verdict::Denied(*pattern);
        }

        if self.rules.allow.iter().any(|p| canonical.contains(p)) {
            Verdict::Accepted(canonical.to_owned())
        } else {
            Verdict::NotVideo
        }
    }

    /// Returns `true` if `url` is admitted.
    pub fn accept(&mut self, url: &str) -> bool {
        matches!(self.evaluate(url), Verdict::Accepted(_))
    }

    /// Returns the canonical URL if `url` is admitted, logging rejections.
    pub fn admit(&mut self, url: &str) -> Option<String> {
        match self.evaluate(url) {
            Verdict::Accepted(canonical) => Some(canonical),
            verdict => {
                tracing::debug!(
                    platform = %self.platform,
                    url,
                    ?verdict,
                    "url rejected"
                );
                None
            }
        }
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Number of distinct canonical URLs evaluated so far.
    #[must_use]
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}

#[cfg(test)]
#[path = "../gatekeeper_test.rs"]
mod tests;
