/// Atelier engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of viewed-item entries retained per profile.
pub const MAX_VIEWED_ITEMS: usize = 20;

/// Affinity weight added for a view of an item's category.
pub const CATEGORY_VIEW_WEIGHT: f64 = 1.0;

/// Affinity weight added for a view of an item's sub-category.
pub const SUBCATEGORY_VIEW_WEIGHT: f64 = 0.5;

/// Number of top affinity entries consulted by the affinity strategy.
pub const TOP_AFFINITY_ENTRIES: usize = 3;

/// Default number of items returned to the caller.
pub const DEFAULT_RESULT_LIMIT: usize = 6;

/// Default result-size hint passed to each candidate generator.
pub const DEFAULT_CANDIDATE_POOL: usize = 10;

/// Default per-generator deadline in milliseconds.
pub const DEFAULT_GENERATOR_DEADLINE_MS: u64 = 4000;
