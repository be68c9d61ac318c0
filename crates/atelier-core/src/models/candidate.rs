use serde::{Deserialize, Serialize};

use super::catalog_item::CatalogItem;

/// Which candidate generator produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyTag {
    /// Category terms mentioned in the assistant's reply.
    ResponseCategory,
    /// Shares a category with recently viewed items.
    ViewedSimilarity,
    /// Matches the profile's strongest category affinities.
    CategoryAffinity,
    /// Color-tag overlap with the profile's preferred colors.
    ColorAffinity,
    /// Newest-first fallback, unfiltered by preference signals.
    Newest,
}

impl StrategyTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyTag::ResponseCategory => "response_category",
            StrategyTag::ViewedSimilarity => "viewed_similarity",
            StrategyTag::CategoryAffinity => "category_affinity",
            StrategyTag::ColorAffinity => "color_affinity",
            StrategyTag::Newest => "newest",
        }
    }
}

impl std::fmt::Display for StrategyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scored, provisional recommendation. Produced and consumed within one
/// request; never persisted.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub item: CatalogItem,
    pub strategy: StrategyTag,
    /// Relevance score in (0.0, 1.0]. Fixed per strategy except affinity,
    /// which scores by normalized weight.
    pub score: f64,
}

impl Candidate {
    pub fn new(item: CatalogItem, strategy: StrategyTag, score: f64) -> Self {
        Self {
            item,
            strategy,
            score,
        }
    }
}
