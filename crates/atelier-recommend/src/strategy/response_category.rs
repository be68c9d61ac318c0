//! Response-category strategy: match the garment terms the assistant's
//! reply actually mentioned. Highest priority, since the reply is the most
//! specific statement of what was offered.

use atelier_core::errors::AtelierResult;
use atelier_core::models::{Candidate, StrategyTag};

use super::{push_unique, GeneratorContext, Strategy};

const SCORE: f64 = 0.9;

/// Reduce a mentioned term to a singular matching stem:
/// "dresses" → "dress", "tees" → "tee", "shorts" → "short".
pub(crate) fn singularize(term: &str) -> String {
    let term = term.trim().to_lowercase();
    if let Some(stem) = term.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    for suffix in ["ses", "xes", "zes", "ches", "shes"] {
        if term.ends_with(suffix) {
            return term[..term.len() - 2].to_string();
        }
    }
    if term.ends_with('s') && !term.ends_with("ss") {
        return term[..term.len() - 1].to_string();
    }
    term
}

pub struct ResponseCategoryStrategy;

impl Strategy for ResponseCategoryStrategy {
    fn tag(&self) -> StrategyTag {
        StrategyTag::ResponseCategory
    }

    fn generate(&self, ctx: &GeneratorContext<'_>) -> AtelierResult<Vec<Candidate>> {
        let mut out = Vec::new();
        for term in &ctx.signals.mentioned_categories {
            if ctx.expired() || out.len() >= ctx.pool {
                break;
            }
            let stem = singularize(term);
            if stem.is_empty() {
                continue;
            }
            for item in ctx.catalog.query_by_category(&stem, ctx.pool)? {
                if out.len() >= ctx.pool {
                    break;
                }
                if item.match_text().contains(&stem) {
                    push_unique(&mut out, Candidate::new(item, self.tag(), SCORE));
                }
            }
        }
        Ok(out)
    }
}
