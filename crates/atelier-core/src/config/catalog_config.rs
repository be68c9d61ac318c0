use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::AtelierResult;

/// Catalog read-through cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogCacheConfig {
    /// Maximum cached query results.
    pub max_entries: u64,
    /// Hard expiry per entry (seconds).
    pub ttl_secs: u64,
    /// Idle expiry per entry (seconds).
    pub tti_secs: u64,
}

impl Default for CatalogCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: defaults::DEFAULT_CACHE_MAX_ENTRIES,
            ttl_secs: defaults::DEFAULT_CACHE_TTL_SECS,
            tti_secs: defaults::DEFAULT_CACHE_TTI_SECS,
        }
    }
}

impl CatalogCacheConfig {
    pub fn from_toml_str(raw: &str) -> AtelierResult<Self> {
        Ok(toml::from_str(raw)?)
    }
}
