//! Platform searchers and the registry that dispatches to them.

mod exa;
mod queries;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use clipscout_core::{AppConfig, Platform, VideoRecord};

use crate::error::ExtractError;
use crate::normalize::{extract, ExtractConfig};
use crate::types::RawHit;

pub use exa::{ExaClient, ExaSearcher};
pub use queries::{build_queries, include_domains, query_templates};

/// A source of raw search hits for one platform.
#[async_trait]
pub trait PlatformSearcher: Send + Sync {
    fn platform(&self) -> Platform;

    /// Returns unvalidated hits for `keyword`, in provider order.
    ///
    /// `max_hits` is the number of usable video URLs the caller wants; a
    /// searcher may stop querying once it has that many, but may also return
    /// more or fewer.
    async fn search(&self, keyword: &str, max_hits: usize) -> Result<Vec<RawHit>, ExtractError>;
}

/// Maps each supported [`Platform`] to its searcher.
#[derive(Default)]
pub struct SearcherRegistry {
    searchers: HashMap<Platform, Box<dyn PlatformSearcher>>,
}

impl std::fmt::Debug for SearcherRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearcherRegistry")
            .field("platforms", &self.platforms())
            .finish()
    }
}

impl SearcherRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an [`ExaSearcher`] for every known platform, sharing one client.
    ///
    /// # Errors
    ///
    /// Propagates [`ExaClient::from_app_config`] failures, most commonly a
    /// missing API key.
    pub fn with_exa(config: &AppConfig) -> Result<Self, ExtractError> {
        let client = Arc::new(ExaClient::from_app_config(config)?);
        let mut registry = Self::new();
        for platform in Platform::ALL {
            registry.register(Box::new(ExaSearcher::new(platform, Arc::clone(&client))));
        }
        Ok(registry)
    }

    /// Adds `searcher`, replacing any searcher already registered for its platform.
    pub fn register(&mut self, searcher: Box<dyn PlatformSearcher>) {
        self.searchers.insert(searcher.platform(), searcher);
    }

    /// # Errors
    ///
    /// Returns [`ExtractError::UnsupportedPlatform`] if nothing is registered
    /// for `platform`.
    pub fn get(&self, platform: Platform) -> Result<&dyn PlatformSearcher, ExtractError> {
        self.searchers
            .get(&platform)
            .map(|searcher| &**searcher)
            .ok_or(ExtractError::UnsupportedPlatform(platform))
    }

    /// Registered platforms in [`Platform::ALL`] order.
    #[must_use]
    pub fn platforms(&self) -> Vec<Platform> {
        Platform::ALL
            .into_iter()
            .filter(|p| self.searchers.contains_key(p))
            .collect()
    }

    /// Raw hits for `keyword` on `platform`, aiming for `max_hits` usable URLs.
    ///
    /// # Errors
    ///
    /// [`ExtractError::UnsupportedPlatform`] or whatever the searcher returns.
    pub async fn search(
        &self,
        platform: Platform,
        keyword: &str,
        max_hits: usize,
    ) -> Result<Vec<RawHit>, ExtractError> {
        self.get(platform)?.search(keyword, max_hits).await
    }

    /// Searches `platform` and runs the hits through a fresh extraction run.
    ///
    /// The searcher's hit budget is the run's `max_results`.
    ///
    /// # Errors
    ///
    /// [`ExtractError::UnsupportedPlatform`] or whatever the searcher returns.
    pub async fn collect(
        &self,
        platform: Platform,
        keyword: &str,
        config: ExtractConfig,
    ) -> Result<Vec<VideoRecord>, ExtractError> {
        let hits = self.search(platform, keyword, config.max_results).await?;
        tracing::debug!(platform = %platform, hits = hits.len(), "normalizing search hits");
        Ok(extract(platform, hits, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSearcher {
        platform: Platform,
        hits: Vec<RawHit>,
    }

    #[async_trait]
    impl PlatformSearcher for FixedSearcher {
        fn platform(&self) -> Platform {
            self.platform
        }

        async fn search(
            &self,
            _keyword: &str,
            _max_hits: usize,
        ) -> Result<Vec<RawHit>, ExtractError> {
            Ok(self.hits.clone())
        }
    }

    struct FailingSearcher;

    #[async_trait]
    impl PlatformSearcher for FailingSearcher {
        fn platform(&self) -> Platform {
            Platform::Douyin
        }

        async fn search(
            &self,
            _keyword: &str,
            _max_hits: usize,
        ) -> Result<Vec<RawHit>, ExtractError> {
            Err(ExtractError::Unauthorized { status: 401 })
        }
    }

    fn hit(url: &str) -> RawHit {
        RawHit {
            url: Some(url.to_owned()),
            title: Some("猫咪视频".to_owned()),
            ..RawHit::default()
        }
    }

    fn kuaishou_registry(hits: Vec<RawHit>) -> SearcherRegistry {
        let mut registry = SearcherRegistry::new();
        registry.register(Box::new(FixedSearcher {
            platform: Platform::Kuaishou,
            hits,
        }));
        registry
    }

    #[tokio::test]
    async fn unregistered_platform_is_typed_error() {
        let registry = kuaishou_registry(Vec::new());
        let err = registry.search(Platform::Bilibili, "猫", 10).await.unwrap_err();
        assert!(matches!(
            err,
            ExtractError::UnsupportedPlatform(Platform::Bilibili)
        ));
    }

    #[tokio::test]
    async fn collect_filters_and_caps() {
        let registry = kuaishou_registry(vec![
            hit("https://v.kuaishou.com/a?x=1"),
            hit("https://www.kuaishou.com/about"),
            hit("https://v.kuaishou.com/a"),
            hit("https://v.kuaishou.com/b"),
            hit("https://v.kuaishou.com/c"),
        ]);
        let records = registry
            .collect(Platform::Kuaishou, "猫", ExtractConfig { max_results: 2 })
            .await
            .unwrap();
        let urls: Vec<&str> = records.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["https://v.kuaishou.com/a", "https://v.kuaishou.com/b"]);
    }

    #[tokio::test]
    async fn collect_runs_do_not_share_seen_urls() {
        let registry = kuaishou_registry(vec![hit("https://v.kuaishou.com/a")]);
        for _ in 0..2 {
            let records = registry
                .collect(Platform::Kuaishou, "猫", ExtractConfig::default())
                .await
                .unwrap();
            assert_eq!(records.len(), 1);
        }
    }

    #[tokio::test]
    async fn searcher_errors_propagate() {
        let mut registry = SearcherRegistry::new();
        registry.register(Box::new(FailingSearcher));
        let err = registry
            .collect(Platform::Douyin, "猫", ExtractConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::Unauthorized { status: 401 }));
    }

    #[test]
    fn platforms_listed_in_catalogue_order() {
        let mut registry = SearcherRegistry::new();
        registry.register(Box::new(FailingSearcher));
        registry.register(Box::new(FixedSearcher {
            platform: Platform::Kuaishou,
            hits: Vec::new(),
        }));
        assert_eq!(
            registry.platforms(),
            vec![Platform::Kuaishou, Platform::Douyin]
        );
    }

    #[test]
    fn register_replaces_existing_platform() {
        let mut registry = kuaishou_registry(Vec::new());
        registry.register(Box::new(FixedSearcher {
            platform: Platform::Kuaishou,
            hits: vec![hit("https://v.kuaishou.com/z")],
        }));
        assert_eq!(registry.platforms().len(), 1);
    }
}
