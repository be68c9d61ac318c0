//! Read-through catalog cache using moka.
//!
//! Replaces the process-wide mutable cache the storefront used to share:
//! the cache is an explicitly constructed object owned by the caller and
//! injected into the engine, with per-entry TTL/TTI and a manual
//! `invalidate()` for catalog writes.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;

use atelier_core::config::CatalogCacheConfig;
use atelier_core::errors::AtelierResult;
use atelier_core::models::CatalogItem;
use atelier_core::traits::ICatalog;

/// Wraps any catalog with a query-result cache.
///
/// Only successful results are cached; backend errors pass through so a
/// flapping catalog is retried on the next call.
pub struct CachedCatalog {
    inner: Arc<dyn ICatalog>,
    cache: Cache<String, Vec<CatalogItem>>,
}

impl CachedCatalog {
    pub fn new(inner: Arc<dyn ICatalog>, config: &CatalogCacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_live(Duration::from_secs(config.ttl_secs))
            .time_to_idle(Duration::from_secs(config.tti_secs))
            .build();
        Self { inner, cache }
    }

    /// Drop every cached query result. Called after catalog writes.
    pub fn invalidate(&self) {
        self.cache.invalidate_all();
    }

    /// Number of cached query results.
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    fn get_or_fetch<F>(&self, key: String, fetch: F) -> AtelierResult<Vec<CatalogItem>>
    where
        F: FnOnce() -> AtelierResult<Vec<CatalogItem>>,
    {
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit);
        }
        let fresh = fetch()?;
        self.cache.insert(key, fresh.clone());
        Ok(fresh)
    }
}

impl ICatalog for CachedCatalog {
    fn query_by_category(&self, term: &str, limit: usize) -> AtelierResult<Vec<CatalogItem>> {
        let key = format!("category:{}:{limit}", term.trim().to_lowercase());
        self.get_or_fetch(key, || self.inner.query_by_category(term, limit))
    }

    fn query_by_ids(&self, ids: &[String]) -> AtelierResult<Vec<CatalogItem>> {
        let key = format!("ids:{}", ids.join(","));
        self.get_or_fetch(key, || self.inner.query_by_ids(ids))
    }

    fn query_newest(&self, limit: usize) -> AtelierResult<Vec<CatalogItem>> {
        let key = format!("newest:{limit}");
        self.get_or_fetch(key, || self.inner.query_newest(limit))
    }

    fn query_by_color(&self, colors: &[String], limit: usize) -> AtelierResult<Vec<CatalogItem>> {
        let mut sorted: Vec<String> = colors.iter().map(|c| c.trim().to_lowercase()).collect();
        sorted.sort();
        let key = format!("color:{}:{limit}", sorted.join(","));
        self.get_or_fetch(key, || self.inner.query_by_color(colors, limit))
    }
}
