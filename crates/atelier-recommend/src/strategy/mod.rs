//! Candidate generators, tried in strict priority order.
//!
//! Each strategy is data-isolated: it reads the catalog, the profile, and
//! the extracted signals, and produces its own candidate list. No strategy
//! mutates shared state, so cascade order is deterministic and testable.

pub mod category_affinity;
pub mod color_affinity;
pub mod newest_fallback;
pub mod response_category;
pub mod viewed_similarity;

use std::time::Instant;

use atelier_core::errors::AtelierResult;
use atelier_core::models::{Candidate, PreferenceProfile, StrategyTag};
use atelier_core::traits::ICatalog;

use crate::intent::IntentSignals;

/// Read-only inputs shared by every generator invocation.
pub struct GeneratorContext<'a> {
    pub catalog: &'a dyn ICatalog,
    pub profile: &'a PreferenceProfile,
    pub signals: &'a IntentSignals,
    /// Result-size hint; generators stop producing once satisfied.
    pub pool: usize,
    /// Per-generator deadline. Expiry reads as a fetch failure.
    pub deadline: Instant,
}

impl GeneratorContext<'_> {
    pub fn expired(&self) -> bool {
        Instant::now() >= self.deadline
    }
}

/// One candidate generator.
pub trait Strategy: Send + Sync {
    fn tag(&self) -> StrategyTag;
    fn generate(&self, ctx: &GeneratorContext<'_>) -> AtelierResult<Vec<Candidate>>;
}

/// The fixed-priority cascade, highest priority first. The reply-derived
/// strategy leads: the reply is the most specific statement of what was
/// offered to the user, so it outranks history-based guesses.
pub fn default_cascade() -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(response_category::ResponseCategoryStrategy),
        Box::new(viewed_similarity::ViewedSimilarityStrategy),
        Box::new(category_affinity::CategoryAffinityStrategy),
        Box::new(color_affinity::ColorAffinityStrategy),
        Box::new(newest_fallback::NewestFallbackStrategy),
    ]
}

/// Push `item` as a candidate unless it is already collected.
pub(crate) fn push_unique(
    out: &mut Vec<Candidate>,
    candidate: Candidate,
) {
    if out.iter().all(|c| c.item.id != candidate.item.id) {
        out.push(candidate);
    }
}
