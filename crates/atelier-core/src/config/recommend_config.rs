use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CANDIDATE_POOL, DEFAULT_GENERATOR_DEADLINE_MS, DEFAULT_RESULT_LIMIT,
};
use crate::errors::AtelierResult;

/// Recommendation engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// Maximum items returned to the caller when the request carries no
    /// explicit limit.
    pub result_limit: usize,
    /// Result-size hint passed to each candidate generator.
    pub candidate_pool: usize,
    /// Per-generator deadline. Expiry is treated as a fetch failure and
    /// advances the cascade.
    pub generator_deadline_ms: u64,
    /// Whether to shuffle the retained top set for presentation variety.
    /// Disabled in tests that assert exact ordering.
    pub shuffle_results: bool,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            candidate_pool: DEFAULT_CANDIDATE_POOL,
            generator_deadline_ms: DEFAULT_GENERATOR_DEADLINE_MS,
            shuffle_results: true,
        }
    }
}

impl RecommendConfig {
    /// Parse from a TOML document, falling back to defaults per field.
    pub fn from_toml_str(raw: &str) -> AtelierResult<Self> {
        Ok(toml::from_str(raw)?)
    }
}
