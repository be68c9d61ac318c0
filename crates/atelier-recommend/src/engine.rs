//! RecommendEngine: orchestrates the full pipeline.
//!
//! intent extraction → strategy cascade (first non-empty filtered result
//! wins) → fallback top-up → rank/dedup/truncate/shuffle → safety check.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use atelier_core::config::RecommendConfig;
use atelier_core::errors::AtelierResult;
use atelier_core::models::{
    Audience, Candidate, PreferenceProfile, RankedItem, RecommendContext, StrategyTag,
};
use atelier_core::traits::{ICatalog, IRecommender};

use crate::filter::{AudienceFilter, NarrowCategoryFilter, NarrowRule, SafetyValidator};
use crate::intent::{IntentExtractor, IntentSignals};
use crate::ranking;
use crate::strategy::{self, GeneratorContext, Strategy};

/// The main recommendation engine.
///
/// Total over its inputs: collaborator failures degrade to the next
/// strategy or to fewer (possibly zero) results. Nothing propagates.
pub struct RecommendEngine<'a> {
    catalog: &'a dyn ICatalog,
    extractor: IntentExtractor,
    audience_filter: AudienceFilter,
    narrow_filter: NarrowCategoryFilter,
    safety: SafetyValidator,
    strategies: Vec<Box<dyn Strategy>>,
    config: RecommendConfig,
}

impl<'a> RecommendEngine<'a> {
    pub fn new(catalog: &'a dyn ICatalog, config: RecommendConfig) -> Self {
        Self {
            catalog,
            extractor: IntentExtractor::new(),
            audience_filter: AudienceFilter::new(),
            narrow_filter: NarrowCategoryFilter::new(),
            safety: SafetyValidator::new(),
            strategies: strategy::default_cascade(),
            config,
        }
    }

    /// Run the pipeline, returning scored candidates with strategy tags.
    pub fn recommend_candidates(
        &self,
        context: &RecommendContext,
        profile: &PreferenceProfile,
    ) -> Vec<Candidate> {
        let signals = self.extractor.extract(&context.query, &context.reply);
        debug!(
            audience = %signals.audience,
            categories = ?signals.mentioned_categories,
            "extracted intent"
        );

        let limit = if context.limit > 0 {
            context.limit
        } else {
            self.config.result_limit
        };
        let narrow = self.narrow_filter.active_rules(&context.query);
        if !narrow.is_empty() {
            debug!(
                terms = ?narrow.iter().map(|r| r.term).collect::<Vec<_>>(),
                "narrow-category filter active"
            );
        }

        let (mut survivors, winner) = self.run_cascade(profile, &signals, &narrow);

        // Top up an under-sized result from the fallback, without ever
        // displacing higher-priority candidates (the fallback score ranks
        // below every strategy score).
        if let Some(winner) = winner {
            if winner != StrategyTag::Newest && survivors.len() < limit {
                let supplements =
                    self.fallback_supplements(profile, &signals, &narrow, &survivors);
                debug!(count = supplements.len(), "fallback supplements added");
                survivors.extend(supplements);
            }
        }

        let seed = ranking::seed_from_request_id(&context.request_id);
        let ranked = ranking::rank(survivors, limit, seed, self.config.shuffle_results);
        let safe = self.safety.enforce(signals.audience, ranked);

        info!(
            results = safe.len(),
            strategy = winner.map(|t| t.as_str()).unwrap_or("none"),
            audience = %signals.audience,
            "recommendation complete"
        );
        safe
    }

    /// Strict priority order; the first strategy whose candidates survive
    /// both cross-cutting filters wins and the cascade stops.
    fn run_cascade(
        &self,
        profile: &PreferenceProfile,
        signals: &IntentSignals,
        narrow: &[&NarrowRule],
    ) -> (Vec<Candidate>, Option<StrategyTag>) {
        for strategy in &self.strategies {
            let raw = self.generate(strategy.as_ref(), profile, signals);
            if raw.is_empty() {
                debug!(strategy = %strategy.tag(), "no candidates, advancing cascade");
                continue;
            }
            let admitted = self.apply_filters(signals.audience, narrow, raw);
            if admitted.is_empty() {
                // Fully filtered is not a final answer; the next strategy
                // may still produce admissible items.
                debug!(strategy = %strategy.tag(), "all candidates filtered, advancing cascade");
                continue;
            }
            debug!(
                strategy = %strategy.tag(),
                candidates = admitted.len(),
                "cascade winner"
            );
            return (admitted, Some(strategy.tag()));
        }
        (Vec::new(), None)
    }

    /// Invoke one generator with its own deadline; errors read as empty.
    fn generate(
        &self,
        strategy: &dyn Strategy,
        profile: &PreferenceProfile,
        signals: &IntentSignals,
    ) -> Vec<Candidate> {
        let ctx = GeneratorContext {
            catalog: self.catalog,
            profile,
            signals,
            pool: self.config.candidate_pool,
            deadline: Instant::now() + Duration::from_millis(self.config.generator_deadline_ms),
        };
        match strategy.generate(&ctx) {
            Ok(candidates) => candidates,
            Err(error) => {
                warn!(
                    strategy = %strategy.tag(),
                    %error,
                    "generator failed, advancing cascade"
                );
                Vec::new()
            }
        }
    }

    fn apply_filters(
        &self,
        audience: Audience,
        narrow: &[&NarrowRule],
        candidates: Vec<Candidate>,
    ) -> Vec<Candidate> {
        let admitted = self.audience_filter.retain(audience, candidates);
        self.narrow_filter.retain(narrow, admitted)
    }

    /// Filtered newest items not already present in the winning set.
    fn fallback_supplements(
        &self,
        profile: &PreferenceProfile,
        signals: &IntentSignals,
        narrow: &[&NarrowRule],
        present: &[Candidate],
    ) -> Vec<Candidate> {
        let newest = self
            .strategies
            .iter()
            .find(|s| s.tag() == StrategyTag::Newest);
        let Some(newest) = newest else {
            return Vec::new();
        };
        let raw = self.generate(newest.as_ref(), profile, signals);
        self.apply_filters(signals.audience, narrow, raw)
            .into_iter()
            .filter(|c| present.iter().all(|p| p.item.id != c.item.id))
            .collect()
    }
}

impl IRecommender for RecommendEngine<'_> {
    fn recommend(
        &self,
        context: &RecommendContext,
        profile: &PreferenceProfile,
    ) -> AtelierResult<Vec<RankedItem>> {
        Ok(self
            .recommend_candidates(context, profile)
            .iter()
            .map(RankedItem::from)
            .collect())
    }
}
