pub mod author;
pub mod count;
pub mod error;
pub mod format;
pub mod gatekeeper;
pub mod normalize;
mod retry;
pub mod search;
pub mod tags;
pub mod text;
pub mod types;

pub use author::infer_author;
pub use count::{parse_count, parse_count_text};
pub use error::ExtractError;
pub use format::format_results;
pub use gatekeeper::{canonicalize_url, CdnVerifier, UrlGatekeeper, UrlRules, Verdict};
pub use normalize::{extract, normalize_hit, ExtractConfig, ExtractionRun, DEFAULT_MAX_RESULTS};
pub use search::{ExaClient, ExaSearcher, PlatformSearcher, SearcherRegistry};
pub use tags::extract_tags;
pub use text::clean_title;
pub use types::{RawCount, RawHit};
