//! In-memory catalog snapshot.
//!
//! Backs tests and embedded deployments. Production callers implement
//! `ICatalog` over their own document store; the matching semantics here
//! (case-insensitive substring on name/category/sub-category) define the
//! contract those implementations follow.

use std::collections::HashMap;

use atelier_core::errors::AtelierResult;
use atelier_core::models::CatalogItem;
use atelier_core::traits::ICatalog;

/// An immutable catalog snapshot held in memory.
pub struct InMemoryCatalog {
    items: Vec<CatalogItem>,
    by_id: HashMap<String, usize>,
}

impl InMemoryCatalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        let by_id = items
            .iter()
            .enumerate()
            .map(|(idx, item)| (item.id.clone(), idx))
            .collect();
        Self { items, by_id }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ICatalog for InMemoryCatalog {
    fn query_by_category(&self, term: &str, limit: usize) -> AtelierResult<Vec<CatalogItem>> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .items
            .iter()
            .filter(|item| item.match_text().contains(&needle))
            .take(limit)
            .cloned()
            .collect())
    }

    fn query_by_ids(&self, ids: &[String]) -> AtelierResult<Vec<CatalogItem>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.by_id.get(id).map(|idx| self.items[*idx].clone()))
            .collect())
    }

    fn query_newest(&self, limit: usize) -> AtelierResult<Vec<CatalogItem>> {
        let mut newest: Vec<CatalogItem> = self.items.clone();
        // Tie-break on id so snapshots with equal timestamps stay stable.
        newest.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        newest.truncate(limit);
        Ok(newest)
    }

    fn query_by_color(&self, colors: &[String], limit: usize) -> AtelierResult<Vec<CatalogItem>> {
        let wanted: Vec<String> = colors.iter().map(|c| c.trim().to_lowercase()).collect();
        if wanted.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .items
            .iter()
            .filter(|item| {
                item.color_tags
                    .iter()
                    .any(|tag| wanted.contains(&tag.to_lowercase()))
            })
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn item(id: &str, name: &str, category: &str, sub: &str, day: u32) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            sub_category: sub.to_string(),
            price: 42.0,
            image: String::new(),
            created_at: Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap(),
            color_tags: vec!["black".to_string()],
            size_tags: vec![],
            keywords: vec![],
        }
    }

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![
            item("d1", "Delia Dress", "Women's", "Dresses", 1),
            item("t1", "Classic Tee", "Men's", "Tees", 2),
            item("j1", "Jogger Pant", "Men's", "Bottoms", 3),
        ])
    }

    #[test]
    fn category_query_matches_name_and_category() {
        let catalog = catalog();
        let dresses = catalog.query_by_category("dress", 10).unwrap();
        assert_eq!(dresses.len(), 1);
        assert_eq!(dresses[0].id, "d1");

        let mens = catalog.query_by_category("men's", 10).unwrap();
        assert_eq!(mens.len(), 2);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let catalog = catalog();
        assert!(catalog.query_by_category("swimwear", 10).unwrap().is_empty());
        assert!(catalog.query_by_ids(&["nope".to_string()]).unwrap().is_empty());
    }

    #[test]
    fn newest_sorts_descending() {
        let catalog = catalog();
        let newest = catalog.query_newest(2).unwrap();
        let ids: Vec<&str> = newest.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["j1", "t1"]);
    }

    #[test]
    fn color_query_intersects_tags() {
        let catalog = catalog();
        let black = catalog
            .query_by_color(&["Black".to_string()], 10)
            .unwrap();
        assert_eq!(black.len(), 3);
        assert!(catalog
            .query_by_color(&["chartreuse".to_string()], 10)
            .unwrap()
            .is_empty());
    }
}
