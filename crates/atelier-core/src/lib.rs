//! # atelier-core
//!
//! Foundation crate for the Atelier recommendation engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{CatalogCacheConfig, RecommendConfig};
pub use errors::{AtelierError, AtelierResult};
pub use models::{
    Audience, Candidate, CatalogItem, PreferenceProfile, RankedItem, RecommendContext, StrategyTag,
};
