use serde::{Deserialize, Serialize};

use super::candidate::{Candidate, StrategyTag};

/// A final recommendation as returned to the caller.
///
/// `strategy` is diagnostic (useful in tests and logs) and is stripped
/// before the list reaches a display surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub sub_category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<StrategyTag>,
}

impl RankedItem {
    /// Drop the diagnostic strategy annotation for display.
    pub fn stripped(mut self) -> Self {
        self.strategy = None;
        self
    }
}

impl From<&Candidate> for RankedItem {
    fn from(candidate: &Candidate) -> Self {
        let item = &candidate.item;
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            image: item.image.clone(),
            category: item.category.clone(),
            sub_category: item.sub_category.clone(),
            strategy: Some(candidate.strategy),
        }
    }
}
