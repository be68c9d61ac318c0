//! Intent extraction: audience preference and mentioned category terms,
//! derived once per request from conversation text.

pub mod audience;
pub mod category_terms;

use atelier_core::models::Audience;

use audience::AudienceDetector;
use category_terms::CategoryScanner;

/// Signals extracted from one `(query, reply)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct IntentSignals {
    /// Inferred shopper-targeting signal. `Neutral` restricts nothing.
    pub audience: Audience,
    /// Garment terms the reply mentions, first-appearance order, deduplicated.
    pub mentioned_categories: Vec<String>,
}

/// Stateless extractor; tables are compiled once at construction.
pub struct IntentExtractor {
    audience: AudienceDetector,
    categories: CategoryScanner,
}

impl IntentExtractor {
    pub fn new() -> Self {
        Self {
            audience: AudienceDetector::new(),
            categories: CategoryScanner::new(),
        }
    }

    /// Extract signals. Audience scans query + reply; category mentions scan
    /// the reply only, since the reply is the most specific statement of
    /// what was actually offered to the user.
    pub fn extract(&self, query: &str, reply: &str) -> IntentSignals {
        let combined = format!("{} {}", query, reply).to_lowercase();
        IntentSignals {
            audience: self.audience.detect(&combined),
            mentioned_categories: self.categories.scan(&reply.to_lowercase()),
        }
    }
}

impl Default for IntentExtractor {
    fn default() -> Self {
        Self::new()
    }
}
