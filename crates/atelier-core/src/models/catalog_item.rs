use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog item as seen by the engine. Read-only; the catalog collaborator
/// owns the data and its uniqueness guarantees (`id` is unique per snapshot).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique identifier within a catalog snapshot.
    pub id: String,
    /// Display name, e.g. "Delia Dress".
    pub name: String,
    /// Top-level category, e.g. "Women's".
    pub category: String,
    /// Sub-category, e.g. "Dresses".
    #[serde(default)]
    pub sub_category: String,
    /// Unit price.
    pub price: f64,
    /// Primary image URL.
    #[serde(default)]
    pub image: String,
    /// When the item entered the catalog. Drives the newest-first fallback.
    pub created_at: DateTime<Utc>,
    /// Color tags, lowercased by the catalog, e.g. ["black", "sage"].
    #[serde(default)]
    pub color_tags: Vec<String>,
    /// Size tags, e.g. ["s", "m", "l"].
    #[serde(default)]
    pub size_tags: Vec<String>,
    /// Merchandising keywords; participate in audience classification.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl CatalogItem {
    /// All text fields consulted by classification, joined and lowercased.
    pub fn classification_text(&self) -> String {
        let mut text = String::with_capacity(
            self.name.len() + self.category.len() + self.sub_category.len() + 16,
        );
        text.push_str(&self.name);
        text.push(' ');
        text.push_str(&self.category);
        text.push(' ');
        text.push_str(&self.sub_category);
        for kw in &self.keywords {
            text.push(' ');
            text.push_str(kw);
        }
        text.to_lowercase()
    }

    /// Name + category + sub-category, lowercased, for term matching.
    pub fn match_text(&self) -> String {
        format!("{} {} {}", self.name, self.category, self.sub_category).to_lowercase()
    }
}

/// Identity equality: two items are equal if they have the same `id`.
/// Content comparison is the catalog's concern, not the engine's.
impl PartialEq for CatalogItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CatalogItem {}
