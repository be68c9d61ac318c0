//! Garment category mention scanning.
//!
//! A fixed vocabulary matched against the reply text. Each term tolerates a
//! plural suffix; the literal matched text is returned so downstream
//! matching can normalize it on its own terms.

use regex::Regex;

/// The garment vocabulary. One entry per canonical term; multi-word terms
/// are matched as written.
const CATEGORY_VOCABULARY: &[&str] = &[
    "dress",
    "skirt",
    "crop top",
    "legging",
    "tank",
    "short",
    "tee",
    "t-shirt",
    "jean",
    "jogger",
    "cargo",
    "hoodie",
    "sweater",
    "jacket",
    "coat",
    "blouse",
];

pub struct CategoryScanner {
    table: Vec<Regex>,
}

impl CategoryScanner {
    pub fn new() -> Self {
        let table = CATEGORY_VOCABULARY
            .iter()
            .map(|term| {
                // "dress" → \bdress(?:e?s)?\b : matches dress/dresses.
                let pattern = format!(r"\b{}(?:e?s)?\b", regex::escape(term));
                Regex::new(&pattern).expect("category vocabulary is static")
            })
            .collect();
        Self { table }
    }

    /// Literal matched terms, ordered by first appearance, deduplicated.
    pub fn scan(&self, lowercased_reply: &str) -> Vec<String> {
        let mut hits: Vec<(usize, String)> = self
            .table
            .iter()
            .filter_map(|pattern| {
                pattern
                    .find(lowercased_reply)
                    .map(|m| (m.start(), m.as_str().to_string()))
            })
            .collect();
        hits.sort_by_key(|(start, _)| *start);

        let mut seen = std::collections::HashSet::new();
        hits.into_iter()
            .filter_map(|(_, term)| seen.insert(term.clone()).then_some(term))
            .collect()
    }
}

impl Default for CategoryScanner {
    fn default() -> Self {
        Self::new()
    }
}
