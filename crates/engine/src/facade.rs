//! Entry points for brand lookups.
//!
//! [`query_brand`] is the plain, stateless lookup: parse, index, score and
//! resolve on every call. [`BrandChecker`] adds a configurable policy, an
//! optional catalog cache and loading through a [`DocumentSource`].

use crate::cache::CatalogCache;
use crate::catalog::Catalog;
use crate::resolver::MatchPolicy;
use crate::result::QueryResult;
use crate::source::DocumentSource;
use boikot_core::config::{CacheConfig, MatchingConfig};
use boikot_core::Result;
use std::sync::Arc;

/// Look up `brand_name` in the brand list `raw_document_text`.
///
/// # Example
/// ```
/// use boikot_engine::{query_brand, StatusClass};
///
/// let text = "Nestle boikot Makanan\nIndofood Tidak Makanan\n";
/// let result = query_brand(text, "Nestle");
///
/// assert_eq!(result.matched_name.as_deref(), Some("Nestle"));
/// assert_eq!(result.status_class, StatusClass::Boikot);
/// assert_eq!(result.recommendations, Some(vec!["Indofood".to_string()]));
/// ```
pub fn query_brand(raw_document_text: &str, brand_name: &str) -> QueryResult {
    Catalog::from_text(raw_document_text).lookup(&MatchPolicy::default(), brand_name)
}

/// Configured lookup service.
#[derive(Debug, Default)]
pub struct BrandChecker {
    policy: MatchPolicy,
    cache: Option<CatalogCache>,
}

impl BrandChecker {
    /// Checker with the default policy and no cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from configuration sections.
    pub fn from_config(matching: &MatchingConfig, cache: &CacheConfig) -> Self {
        let checker = Self::new().with_policy(MatchPolicy::from(matching));
        if cache.enabled {
            checker.with_cache(CatalogCache::new(cache.capacity))
        } else {
            checker
        }
    }

    /// Replace the matching policy.
    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Reuse catalogs across queries on unchanged text.
    pub fn with_cache(mut self, cache: CatalogCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Active policy.
    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// Catalog cache, when enabled.
    pub fn cache(&self) -> Option<&CatalogCache> {
        self.cache.as_ref()
    }

    /// Catalog for `raw_text`, from the cache when enabled.
    pub fn catalog(&self, raw_text: &str) -> Arc<Catalog> {
        match &self.cache {
            Some(cache) => cache.get_or_build(raw_text),
            None => Arc::new(Catalog::from_text(raw_text)),
        }
    }

    /// Look up `brand_name` in already loaded text.
    pub fn check_text(&self, raw_text: &str, brand_name: &str) -> QueryResult {
        self.catalog(raw_text).lookup(&self.policy, brand_name)
    }

    /// Load the brand list from `source` and look up `brand_name`.
    ///
    /// A missing, unreadable or non-UTF-8 document yields a source-unavailable
    /// result. Other I/O failures are returned as errors.
    pub fn check(&self, source: &dyn DocumentSource, brand_name: &str) -> Result<QueryResult> {
        match load_text(source)? {
            Some(text) => Ok(self.check_text(&text, brand_name)),
            None => Ok(QueryResult::source_unavailable()),
        }
    }
}

/// Text of `source`, or `None` when it cannot be read at all.
pub fn load_text(source: &dyn DocumentSource) -> Result<Option<String>> {
    match source.load() {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.code.is_source_unavailable() => {
            tracing::warn!(
                source = %source.describe(),
                error = %err.message,
                "Brand list unavailable"
            );
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
