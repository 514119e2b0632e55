//! Loosely-typed search hit as handed over by a search provider.
//!
//! ## Observed shape of provider results
//!
//! ### Text fields
//! `title`, `text` and `author` are usually strings but may be `null`, absent,
//! or occasionally numeric (an author handle made only of digits comes back as
//! a JSON number). Numbers and booleans are stringified; anything else is
//! treated as absent.
//!
//! ### Count fields
//! Engagement counts arrive as integers (`12000`), floats (`1.2e4`), or
//! display strings with magnitude suffixes (`"1.2万"`, `"3.4w"`, `"12k"`,
//! `"1,024"`). They are kept as [`RawCount`] and only interpreted by
//! [`crate::count::parse_count`]. Values of any other JSON type are dropped.
//!
//! ### Publish time
//! Passed through as text; the Exa API calls the field `publishedDate`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A count field before interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCount {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for RawCount {
    fn from(value: i64) -> Self {
        RawCount::Integer(value)
    }
}

impl From<u64> for RawCount {
    fn from(value: u64) -> Self {
        RawCount::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for RawCount {
    fn from(value: f64) -> Self {
        RawCount::Float(value)
    }
}

impl From<&str> for RawCount {
    fn from(value: &str) -> Self {
        RawCount::Text(value.to_owned())
    }
}

/// One unvalidated search result. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawHit {
    #[serde(default, deserialize_with = "loose_text")]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "loose_text")]
    pub title: Option<String>,

    /// Free-text description or page excerpt.
    #[serde(default, deserialize_with = "loose_text")]
    pub text: Option<String>,

    #[serde(default, deserialize_with = "loose_text")]
    pub author: Option<String>,

    #[serde(default, deserialize_with = "loose_count")]
    pub views: Option<RawCount>,

    #[serde(default, deserialize_with = "loose_count")]
    pub likes: Option<RawCount>,

    #[serde(default, deserialize_with = "loose_count")]
    pub comments: Option<RawCount>,

    #[serde(default, deserialize_with = "loose_count")]
    pub shares: Option<RawCount>,

    #[serde(
        default,
        alias = "publishedDate",
        alias = "publish_time",
        deserialize_with = "loose_text"
    )]
    pub published: Option<String>,
}

fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }))
}

fn loose_count<'de, D>(deserializer: D) -> Result<Option<RawCount>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(RawCount::Text(s)),
        Value::Number(n) => n
            .as_i64()
            .map(RawCount::Integer)
            .or_else(|| n.as_u64().map(RawCount::from))
            .or_else(|| n.as_f64().map(RawCount::Float)),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_sparse_hit() {
        let hit: RawHit = serde_json::from_value(json!({"url": "https://v.kuaishou.com/a"})).unwrap();
        assert_eq!(hit.url.as_deref(), Some("https://v.kuaishou.com/a"));
        assert!(hit.title.is_none());
        assert!(hit.views.is_none());
    }

    #[test]
    fn null_fields_become_none() {
        let hit: RawHit =
            serde_json::from_value(json!({"title": null, "likes": null, "author": null})).unwrap();
        assert!(hit.title.is_none());
        assert!(hit.likes.is_none());
        assert!(hit.author.is_none());
    }

    #[test]
    fn numeric_author_is_stringified() {
        let hit: RawHit = serde_json::from_value(json!({"author": 123_456})).unwrap();
        assert_eq!(hit.author.as_deref(), Some("123456"));
    }

    #[test]
    fn counts_keep_their_shape() {
        let hit: RawHit = serde_json::from_value(json!({
            "views": "1.2万",
            "likes": 300,
            "comments": 4.5,
            "shares": true
        }))
        .unwrap();
        assert_eq!(hit.views, Some(RawCount::Text("1.2万".to_owned())));
        assert_eq!(hit.likes, Some(RawCount::Integer(300)));
        assert_eq!(hit.comments, Some(RawCount::Float(4.5)));
        assert!(hit.shares.is_none());
    }

    #[test]
    fn published_date_alias() {
        let hit: RawHit =
            serde_json::from_value(json!({"publishedDate": "2024-05-01T00:00:00.000Z"})).unwrap();
        assert_eq!(hit.published.as_deref(), Some("2024-05-01T00:00:00.000Z"));
    }

    #[test]
    fn object_valued_text_is_dropped() {
        let hit: RawHit = serde_json::from_value(json!({"title": {"zh": "标题"}})).unwrap();
        assert!(hit.title.is_none());
    }
}
