//! Category-affinity strategy: items matching the profile's strongest
//! accumulated category affinities, scored by normalized weight.

use atelier_core::constants::TOP_AFFINITY_ENTRIES;
use atelier_core::errors::AtelierResult;
use atelier_core::models::{Candidate, StrategyTag};

use super::{push_unique, GeneratorContext, Strategy};

pub struct CategoryAffinityStrategy;

impl Strategy for CategoryAffinityStrategy {
    fn tag(&self) -> StrategyTag {
        StrategyTag::CategoryAffinity
    }

    fn generate(&self, ctx: &GeneratorContext<'_>) -> AtelierResult<Vec<Candidate>> {
        let top = ctx.profile.top_affinities(TOP_AFFINITY_ENTRIES);
        let max_weight = top.first().map(|(_, w)| *w).unwrap_or(0.0);
        if max_weight <= 0.0 {
            return Ok(Vec::new());
        }

        let mut out = Vec::new();
        for (tag, weight) in &top {
            if ctx.expired() || out.len() >= ctx.pool {
                break;
            }
            let score = weight / max_weight;
            for item in ctx.catalog.query_by_category(tag, ctx.pool)? {
                if out.len() >= ctx.pool {
                    break;
                }
                let matches_tag = item.category.eq_ignore_ascii_case(tag)
                    || item.sub_category.eq_ignore_ascii_case(tag);
                if matches_tag {
                    push_unique(&mut out, Candidate::new(item, self.tag(), score));
                }
            }
        }
        Ok(out)
    }
}
