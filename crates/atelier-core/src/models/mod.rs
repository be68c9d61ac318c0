//! Domain models. One model per file.

mod audience;
mod candidate;
mod catalog_item;
mod profile;
mod ranked_item;
mod request;

pub use audience::Audience;
pub use candidate::{Candidate, StrategyTag};
pub use catalog_item::CatalogItem;
pub use profile::{LikedItem, PreferenceProfile, ViewedItem};
pub use ranked_item::RankedItem;
pub use request::RecommendContext;
