//! Title cleanup for search-result text.
//!
//! Search providers hand back titles with inline links, leftover markup, HTML
//! entities and decorative prefixes such as `【热门】`. [`clean_title`] removes
//! all of them in a fixed order; the order matters because removing a URL can
//! expose a tag and removing a tag can leave whitespace runs behind.

use std::sync::LazyLock;

use regex::Regex;

/// Absolute http(s) URLs: scheme, then any run of URL-safe ASCII characters.
pub(crate) static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:[a-zA-Z0-9$-_@.&+!*\\(),]|%[0-9a-fA-F]{2})+").expect("valid url regex")
});

static HTML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tags regex"));

/// One leading decoration: an opening bracket up to the first closing bracket
/// of any supported kind.
static LEADING_DECORATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[【\[(].*?[\])】]").expect("valid decoration regex"));

/// The only entities we decode. This is not a general HTML entity decoder.
const ENTITIES: [(&str, &str); 4] = [
    ("&quot;", "\""),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
];

/// Cleans a raw title for display.
///
/// Steps, in order: strip URLs, strip HTML tags, decode the fixed entity set,
/// collapse whitespace, strip at most one leading bracket decoration, trim.
///
/// ```
/// use clipscout_extract::clean_title;
/// assert_eq!(clean_title("【测试】hello   world"), "hello world");
/// ```
#[must_use]
pub fn clean_title(title: &str) -> String {
    let without_urls = URL_RE.replace_all(title, "");
    let without_tags = HTML_TAG_RE.replace_all(&without_urls, "");
    let decoded = unescape_entities(&without_tags);
    let collapsed = collapse_whitespace(&decoded);
    let undecorated = LEADING_DECORATION_RE.replace(&collapsed, "");
    undecorated.trim().to_owned()
}

/// Decodes `&quot;`, `&amp;`, `&lt;` and `&gt;`, applied literally in that order.
#[must_use]
pub fn unescape_entities(text: &str) -> String {
    ENTITIES
        .iter()
        .fold(text.to_owned(), |acc, (entity, plain)| acc.replace(entity, plain))
}

/// Replaces every whitespace run (including newlines) with a single space and
/// drops leading/trailing whitespace.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
