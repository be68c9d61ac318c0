//! Color-affinity strategy: items whose color tags intersect the profile's
//! explicitly chosen colors.

use atelier_core::errors::AtelierResult;
use atelier_core::models::{Candidate, StrategyTag};

use super::{push_unique, GeneratorContext, Strategy};

const SCORE: f64 = 0.6;

pub struct ColorAffinityStrategy;

impl Strategy for ColorAffinityStrategy {
    fn tag(&self) -> StrategyTag {
        StrategyTag::ColorAffinity
    }

    fn generate(&self, ctx: &GeneratorContext<'_>) -> AtelierResult<Vec<Candidate>> {
        if ctx.profile.preferred_colors.is_empty() || ctx.expired() {
            return Ok(Vec::new());
        }
        // The profile holds a set; sort so the query shape is deterministic.
        let mut colors: Vec<String> = ctx.profile.preferred_colors.iter().cloned().collect();
        colors.sort();

        let mut out = Vec::new();
        for item in ctx.catalog.query_by_color(&colors, ctx.pool)? {
            if out.len() >= ctx.pool {
                break;
            }
            push_unique(&mut out, Candidate::new(item, self.tag(), SCORE));
        }
        Ok(out)
    }
}
