//! Viewed-item-similarity strategy: items sharing a category or
//! sub-category with the user's most recent views, excluding the views
//! themselves.

use atelier_core::errors::AtelierResult;
use atelier_core::models::{Candidate, StrategyTag};

use super::{push_unique, GeneratorContext, Strategy};

const SCORE: f64 = 0.8;

pub struct ViewedSimilarityStrategy;

impl Strategy for ViewedSimilarityStrategy {
    fn tag(&self) -> StrategyTag {
        StrategyTag::ViewedSimilarity
    }

    fn generate(&self, ctx: &GeneratorContext<'_>) -> AtelierResult<Vec<Candidate>> {
        // Category terms in recency order, newest view first.
        let mut terms: Vec<String> = Vec::new();
        for viewed in &ctx.profile.viewed_items {
            for term in [&viewed.category, &viewed.sub_category] {
                let term = term.trim().to_lowercase();
                if !term.is_empty() && !terms.contains(&term) {
                    terms.push(term);
                }
            }
        }

        let mut out = Vec::new();
        for term in &terms {
            if ctx.expired() || out.len() >= ctx.pool {
                break;
            }
            for item in ctx.catalog.query_by_category(term, ctx.pool)? {
                if out.len() >= ctx.pool {
                    break;
                }
                // Similarity means sharing the field, not merely mentioning it.
                let shares_field = item.category.eq_ignore_ascii_case(term)
                    || item.sub_category.eq_ignore_ascii_case(term);
                if shares_field && !ctx.profile.has_viewed(&item.id) {
                    push_unique(&mut out, Candidate::new(item, self.tag(), SCORE));
                }
            }
        }
        Ok(out)
    }
}
