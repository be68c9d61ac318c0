use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog_item::CatalogItem;
use crate::constants::{CATEGORY_VIEW_WEIGHT, MAX_VIEWED_ITEMS, SUBCATEGORY_VIEW_WEIGHT};

/// One entry in the bounded view history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewedItem {
    pub item_id: String,
    pub category: String,
    pub sub_category: String,
    pub viewed_at: DateTime<Utc>,
}

/// A liked item. Set semantics by `item_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikedItem {
    pub item_id: String,
    pub liked_at: DateTime<Utc>,
}

/// Per-session preference signals accumulated by the storefront.
///
/// The profile is owned by its session. The recommendation engine reads it
/// and never mutates it; all mutation happens through the methods below,
/// driven by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceProfile {
    /// Most recent views, newest first, no duplicate `item_id`, at most
    /// [`MAX_VIEWED_ITEMS`] entries. Re-viewing moves an entry to the front.
    pub viewed_items: Vec<ViewedItem>,
    pub liked_items: Vec<LikedItem>,
    /// Normalized category/sub-category name → non-negative weight.
    /// Never decremented automatically.
    pub category_affinity: HashMap<String, f64>,
    /// Explicit choices. Each setter fully replaces the prior set.
    pub preferred_styles: HashSet<String>,
    pub preferred_seasons: HashSet<String>,
    pub preferred_occasions: HashSet<String>,
    pub preferred_colors: HashSet<String>,
}

/// Normalized form used as the affinity map key.
pub(crate) fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

impl PreferenceProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a view: move-to-front dedup on the history, bump affinities.
    pub fn record_view(&mut self, item: &CatalogItem) {
        self.viewed_items.retain(|v| v.item_id != item.id);
        self.viewed_items.insert(
            0,
            ViewedItem {
                item_id: item.id.clone(),
                category: item.category.clone(),
                sub_category: item.sub_category.clone(),
                viewed_at: Utc::now(),
            },
        );
        self.viewed_items.truncate(MAX_VIEWED_ITEMS);

        let category = normalize_tag(&item.category);
        if !category.is_empty() {
            *self.category_affinity.entry(category).or_insert(0.0) += CATEGORY_VIEW_WEIGHT;
        }
        let sub_category = normalize_tag(&item.sub_category);
        if !sub_category.is_empty() {
            *self.category_affinity.entry(sub_category).or_insert(0.0) += SUBCATEGORY_VIEW_WEIGHT;
        }
    }

    /// Record a like. Idempotent per `item_id`.
    pub fn record_like(&mut self, item_id: &str) {
        if self.liked_items.iter().any(|l| l.item_id == item_id) {
            return;
        }
        self.liked_items.push(LikedItem {
            item_id: item_id.to_string(),
            liked_at: Utc::now(),
        });
    }

    /// Remove a like if present.
    pub fn unlike(&mut self, item_id: &str) {
        self.liked_items.retain(|l| l.item_id != item_id);
    }

    pub fn has_viewed(&self, item_id: &str) -> bool {
        self.viewed_items.iter().any(|v| v.item_id == item_id)
    }

    pub fn has_liked(&self, item_id: &str) -> bool {
        self.liked_items.iter().any(|l| l.item_id == item_id)
    }

    // Explicit choices replace, not merge: the storefront sends the full
    // selection on every update.
    pub fn set_preferred_styles(&mut self, styles: impl IntoIterator<Item = String>) {
        self.preferred_styles = styles.into_iter().map(|s| normalize_tag(&s)).collect();
    }

    pub fn set_preferred_seasons(&mut self, seasons: impl IntoIterator<Item = String>) {
        self.preferred_seasons = seasons.into_iter().map(|s| normalize_tag(&s)).collect();
    }

    pub fn set_preferred_occasions(&mut self, occasions: impl IntoIterator<Item = String>) {
        self.preferred_occasions = occasions.into_iter().map(|s| normalize_tag(&s)).collect();
    }

    pub fn set_preferred_colors(&mut self, colors: impl IntoIterator<Item = String>) {
        self.preferred_colors = colors.into_iter().map(|s| normalize_tag(&s)).collect();
    }

    /// The `n` strongest affinity entries, heaviest first. Ties break on the
    /// tag name so the ordering is stable across runs.
    pub fn top_affinities(&self, n: usize) -> Vec<(String, f64)> {
        let mut entries: Vec<(String, f64)> = self
            .category_affinity
            .iter()
            .map(|(tag, weight)| (tag.clone(), *weight))
            .collect();
        entries.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        entries.truncate(n);
        entries
    }

    /// Largest affinity weight, used to normalize affinity scores.
    pub fn max_affinity_weight(&self) -> f64 {
        self.category_affinity
            .values()
            .copied()
            .fold(0.0_f64, f64::max)
    }
}
