//! Narrow-category filter.
//!
//! When the user's own query names a specific garment term, general category
//! matching is not enough: a "tees" query must not surface joggers that
//! happen to share a category page. Each recognized narrow term carries an
//! include/exclude pattern pair; an item survives iff it matches the include
//! pattern and none of the exclusions. No recognized term → pass-through.

use atelier_core::models::Candidate;
use regex::Regex;

/// One narrow-term rule. `trigger` is matched against the query; `include`
/// and `exclude` against item name/category/sub-category.
struct RuleSpec {
    term: &'static str,
    trigger: &'static str,
    include: &'static str,
    exclude: &'static str,
}

/// The recognized narrow terms. Extended by adding rows, not branches.
const NARROW_RULES: &[RuleSpec] = &[
    RuleSpec {
        term: "tee",
        trigger: r"\btees?\b|\bt[\s-]?shirts?\b",
        include: r"\btees?\b|\bt[\s-]?shirts?\b",
        exclude: r"\bjoggers?\b|\bcargo\b|\bpants?\b|\btanks?\b|\bcrop\b",
    },
    RuleSpec {
        term: "shorts",
        trigger: r"\bshorts\b",
        include: r"\bshorts?\b",
        exclude: r"\bshirts?\b|\bpants?\b|\bcargo\b|\bjoggers?\b|\bjeans?\b",
    },
    RuleSpec {
        term: "jogger",
        trigger: r"\bjoggers?\b",
        include: r"\bjoggers?\b",
        exclude: r"\bshirts?\b|\btees?\b|\bshorts?\b|\btanks?\b",
    },
    RuleSpec {
        term: "legging",
        trigger: r"\bleggings?\b",
        include: r"\bleggings?\b",
        exclude: r"\bjeans?\b|\bjoggers?\b|\bshorts?\b",
    },
];

/// A compiled rule, active when its trigger matched the query.
pub struct NarrowRule {
    pub term: &'static str,
    trigger: Regex,
    include: Regex,
    exclude: Regex,
}

impl NarrowRule {
    /// Does this item belong to the narrow category?
    pub fn admits_text(&self, lowercased_item_text: &str) -> bool {
        self.include.is_match(lowercased_item_text)
            && !self.exclude.is_match(lowercased_item_text)
    }
}

pub struct NarrowCategoryFilter {
    rules: Vec<NarrowRule>,
}

impl NarrowCategoryFilter {
    pub fn new() -> Self {
        let rules = NARROW_RULES
            .iter()
            .map(|spec| NarrowRule {
                term: spec.term,
                trigger: Regex::new(spec.trigger).expect("narrow rule table is static"),
                include: Regex::new(spec.include).expect("narrow rule table is static"),
                exclude: Regex::new(spec.exclude).expect("narrow rule table is static"),
            })
            .collect();
        Self { rules }
    }

    /// Rules whose trigger appears in the query. Usually zero or one;
    /// multiple active rules all apply.
    pub fn active_rules(&self, query: &str) -> Vec<&NarrowRule> {
        let query = query.to_lowercase();
        self.rules
            .iter()
            .filter(|rule| rule.trigger.is_match(&query))
            .collect()
    }

    /// Retain candidates surviving every active rule.
    pub fn retain(&self, active: &[&NarrowRule], candidates: Vec<Candidate>) -> Vec<Candidate> {
        if active.is_empty() {
            return candidates;
        }
        candidates
            .into_iter()
            .filter(|c| {
                let text = c.item.match_text();
                active.iter().all(|rule| rule.admits_text(&text))
            })
            .collect()
    }
}

impl Default for NarrowCategoryFilter {
    fn default() -> Self {
        Self::new()
    }
}
