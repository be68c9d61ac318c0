//! Newest-first fallback: unfiltered by preference signals, always
//! available, so the cascade never comes back empty purely for lack of
//! signal. Also used to top up an under-sized higher-priority result.

use atelier_core::errors::AtelierResult;
use atelier_core::models::{Candidate, StrategyTag};

use super::{GeneratorContext, Strategy};

const SCORE: f64 = 0.1;

pub struct NewestFallbackStrategy;

impl Strategy for NewestFallbackStrategy {
    fn tag(&self) -> StrategyTag {
        StrategyTag::Newest
    }

    fn generate(&self, ctx: &GeneratorContext<'_>) -> AtelierResult<Vec<Candidate>> {
        if ctx.expired() {
            return Ok(Vec::new());
        }
        Ok(ctx
            .catalog
            .query_newest(ctx.pool)?
            .into_iter()
            .map(|item| Candidate::new(item, self.tag(), SCORE))
            .collect())
    }
}
