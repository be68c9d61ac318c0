//! Audience-consistency filter.
//!
//! Classifies every candidate against explicit gender indicators and
//! intrinsically gendered garment terms, then applies the keep rule for the
//! detected audience. Applied to every candidate from every strategy.

use std::sync::LazyLock;

use atelier_core::models::{Audience, Candidate, CatalogItem};
use regex::Regex;

/// Explicit gender words in category/sub-category/name/keywords.
static WOMEN_INDICATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:women|woman|womens|lady|ladies|female|girls?)\b").unwrap()
});

static MEN_INDICATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:men|man|mens|male|guys)\b").unwrap());

/// Garment terms intrinsically associated with one audience.
static WOMEN_CATEGORY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:dress(?:es)?|skirts?|crop|leggings?|blouses?|gowns?|bras?|heels?)\b").unwrap()
});

static MEN_CATEGORY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:suits?|ties?|boxers?|tux(?:edos?)?)\b").unwrap());

/// The four boolean facts the keep rule is decided on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudienceClass {
    pub women_indicator: bool,
    pub men_indicator: bool,
    pub women_category: bool,
    pub men_category: bool,
}

impl AudienceClass {
    pub fn unmarked(&self) -> bool {
        !(self.women_indicator || self.men_indicator || self.women_category || self.men_category)
    }
}

pub struct AudienceFilter;

impl AudienceFilter {
    pub fn new() -> Self {
        Self
    }

    /// Classify one item from its text fields.
    pub fn classify(&self, item: &CatalogItem) -> AudienceClass {
        let text = item.classification_text();
        AudienceClass {
            women_indicator: WOMEN_INDICATOR_RE.is_match(&text),
            men_indicator: MEN_INDICATOR_RE.is_match(&text),
            women_category: WOMEN_CATEGORY_RE.is_match(&text),
            men_category: MEN_CATEGORY_RE.is_match(&text),
        }
    }

    /// The keep rule. Deliberately asymmetric: unmarked stock defaults to
    /// the men/unisex side of the catalog, so gender-neutral items are
    /// admissible for a men audience but never for a women audience.
    pub fn admits(&self, audience: Audience, item: &CatalogItem) -> bool {
        if !audience.is_restricted() {
            return true;
        }
        let class = self.classify(item);
        match audience {
            Audience::Women => {
                (class.women_indicator || class.women_category) && !class.men_indicator
            }
            Audience::Men => !(class.women_indicator || class.women_category),
            Audience::Neutral => true,
        }
    }

    /// Retain admissible candidates.
    pub fn retain(&self, audience: Audience, candidates: Vec<Candidate>) -> Vec<Candidate> {
        if !audience.is_restricted() {
            return candidates;
        }
        candidates
            .into_iter()
            .filter(|c| self.admits(audience, &c.item))
            .collect()
    }
}

impl Default for AudienceFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::models::StrategyTag;
    use chrono::Utc;

    fn item(name: &str, category: &str, sub: &str) -> CatalogItem {
        CatalogItem {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            category: category.to_string(),
            sub_category: sub.to_string(),
            price: 39.0,
            image: String::new(),
            created_at: Utc::now(),
            color_tags: vec![],
            size_tags: vec![],
            keywords: vec![],
        }
    }

    fn filter() -> AudienceFilter {
        AudienceFilter::new()
    }

    #[test]
    fn classify_reads_all_text_fields() {
        let class = filter().classify(&item("Delia Dress", "Women's", "Dresses"));
        assert!(class.women_indicator);
        assert!(class.women_category);
        assert!(!class.men_indicator);
        assert!(!class.unmarked());

        assert!(filter()
            .classify(&item("Canvas Tote", "Accessories", ""))
            .unmarked());
    }

    #[test]
    fn women_audience_requires_a_women_signal() {
        let f = filter();
        assert!(f.admits(Audience::Women, &item("Delia Dress", "Women's", "Dresses")));
        // Intrinsic garment term is enough even without an explicit indicator.
        assert!(f.admits(Audience::Women, &item("Wrap Skirt", "Apparel", "")));
        // Unmarked items are not admissible for a women audience.
        assert!(!f.admits(Audience::Women, &item("Canvas Tote", "Accessories", "")));
        // An explicit men indicator always disqualifies.
        assert!(!f.admits(Audience::Women, &item("Dress Shirt", "Men's", "Shirts")));
    }

    #[test]
    fn men_audience_admits_unmarked_items() {
        let f = filter();
        assert!(f.admits(Audience::Men, &item("Jogger Pant", "Men's", "Bottoms")));
        // Gender-neutral stock passes for men.
        assert!(f.admits(Audience::Men, &item("Canvas Tote", "Accessories", "")));
        // Anything women-signaled is dropped.
        assert!(!f.admits(Audience::Men, &item("Delia Dress", "Women's", "Dresses")));
        assert!(!f.admits(Audience::Men, &item("Wrap Skirt", "Apparel", "")));
    }

    #[test]
    fn neutral_passes_everything() {
        let f = filter();
        assert!(f.admits(Audience::Neutral, &item("Delia Dress", "Women's", "Dresses")));
        assert!(f.admits(Audience::Neutral, &item("Jogger Pant", "Men's", "Bottoms")));
    }

    #[test]
    fn keywords_participate_in_classification() {
        let mut tote = item("Canvas Tote", "Accessories", "");
        tote.keywords = vec!["women".to_string()];
        assert!(filter().admits(Audience::Women, &tote));
    }

    #[test]
    fn retain_keeps_order() {
        let f = filter();
        let candidates = vec![
            Candidate::new(item("Delia Dress", "Women's", "Dresses"), StrategyTag::ResponseCategory, 0.9),
            Candidate::new(item("Jogger Pant", "Men's", "Bottoms"), StrategyTag::ResponseCategory, 0.9),
            Candidate::new(item("Wrap Skirt", "Apparel", ""), StrategyTag::ResponseCategory, 0.9),
        ];
        let kept = f.retain(Audience::Women, candidates);
        let ids: Vec<&str> = kept.iter().map(|c| c.item.id.as_str()).collect();
        assert_eq!(ids, vec!["delia-dress", "wrap-skirt"]);
    }
}
