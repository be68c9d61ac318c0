//! Final audience safety check.
//!
//! Re-applies the audience classification to the output list as an
//! independent last line of defense. It does not trust upstream filter
//! state, so a defect in any one strategy's filtering cannot leak an item
//! for the wrong audience. Violators are dropped with no substitution.

use atelier_core::models::{Audience, Candidate};
use tracing::warn;

use super::audience::AudienceFilter;

pub struct SafetyValidator {
    filter: AudienceFilter,
}

impl SafetyValidator {
    pub fn new() -> Self {
        Self {
            filter: AudienceFilter::new(),
        }
    }

    /// Drop any item inconsistent with the detected audience. A drop here
    /// means an upstream filter defect, so it is logged loudly.
    pub fn enforce(&self, audience: Audience, candidates: Vec<Candidate>) -> Vec<Candidate> {
        if !audience.is_restricted() {
            return candidates;
        }
        candidates
            .into_iter()
            .filter(|c| {
                let keep = self.filter.admits(audience, &c.item);
                if !keep {
                    warn!(
                        item = %c.item.id,
                        strategy = %c.strategy,
                        %audience,
                        "safety validator dropped audience violator from final output"
                    );
                }
                keep
            })
            .collect()
    }
}

impl Default for SafetyValidator {
    fn default() -> Self {
        Self::new()
    }
}
