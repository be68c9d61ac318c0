//! Property tests for the recommendation pipeline invariants: bounded
//! deduplicated output, audience safety, and per-request determinism.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use atelier_catalog::InMemoryCatalog;
use atelier_core::config::RecommendConfig;
use atelier_core::models::{Audience, CatalogItem, PreferenceProfile, RecommendContext};
use atelier_core::traits::IRecommender;
use atelier_recommend::filter::AudienceFilter;
use atelier_recommend::intent::IntentExtractor;
use atelier_recommend::RecommendEngine;

const NAMES: &[&str] = &[
    "Delia Dress",
    "Wrap Skirt",
    "Pocket Tee",
    "Heavyweight T-Shirt",
    "Jogger Pant",
    "Cargo Short",
    "Canvas Tote",
    "Boxer Brief",
    "Silk Blouse",
    "Track Pant",
    "Rib Tank",
    "Wool Coat",
];

const CATEGORIES: &[&str] = &["Women's", "Men's", "Accessories", "Apparel"];
const SUB_CATEGORIES: &[&str] = &["Dresses", "Tees", "Bottoms", "Tops", "Shorts", ""];
const COLORS: &[&str] = &["black", "white", "sage", "navy", "rust"];

const QUERIES: &[&str] = &[
    "do you have dresses",
    "show me tees for men",
    "any shorts in stock",
    "women's tops please",
    "build me a casual weekend outfit",
    "something for the guys",
    "surprise me",
];

const REPLIES: &[&str] = &[
    "Our Women's category includes the Delia Dress.",
    "Yes, we have several tees available.",
    "These joggers are popular with men right now.",
    "Here's a casual look for you.",
    "We just restocked shorts and tanks.",
    "Happy to help!",
];

prop_compose! {
    fn arb_item_parts()(
        name_idx in 0..NAMES.len(),
        category_idx in 0..CATEGORIES.len(),
        sub_idx in 0..SUB_CATEGORIES.len(),
        price in 10.0_f64..120.0,
        age_days in 0_i64..90,
        color_idx in 0..COLORS.len(),
    ) -> (usize, usize, usize, f64, i64, usize) {
        (name_idx, category_idx, sub_idx, price, age_days, color_idx)
    }
}

fn build_catalog(parts: &[(usize, usize, usize, f64, i64, usize)]) -> Vec<CatalogItem> {
    let base = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
    parts
        .iter()
        .enumerate()
        .map(
            |(i, (name_idx, category_idx, sub_idx, price, age_days, color_idx))| CatalogItem {
                id: format!("item-{i}"),
                name: NAMES[*name_idx].to_string(),
                category: CATEGORIES[*category_idx].to_string(),
                sub_category: SUB_CATEGORIES[*sub_idx].to_string(),
                price: *price,
                image: String::new(),
                created_at: base + Duration::days(*age_days),
                color_tags: vec![COLORS[*color_idx].to_string()],
                size_tags: vec![],
                keywords: vec![],
            },
        )
        .collect()
}

proptest! {
    /// Output is bounded by the limit and free of duplicate ids, for any
    /// catalog and any conversation from the pools.
    #[test]
    fn output_bounded_and_deduplicated(
        parts in prop::collection::vec(arb_item_parts(), 0..40),
        query_idx in 0..QUERIES.len(),
        reply_idx in 0..REPLIES.len(),
        limit in 1_usize..9,
    ) {
        let catalog = InMemoryCatalog::new(build_catalog(&parts));
        let engine = RecommendEngine::new(&catalog, RecommendConfig::default());
        let context = RecommendContext::new(QUERIES[query_idx], REPLIES[reply_idx])
            .with_limit(limit)
            .with_request_id("prop");

        let results = engine.recommend(&context, &PreferenceProfile::new()).unwrap();

        prop_assert!(results.len() <= limit);
        let mut seen = std::collections::HashSet::new();
        for item in &results {
            prop_assert!(seen.insert(item.id.clone()), "duplicate id {}", item.id);
        }
    }

    /// For a restricted audience, no output item carries the opposite
    /// audience's exclusive signals, the core leakage invariant.
    #[test]
    fn audience_invariant_holds(
        parts in prop::collection::vec(arb_item_parts(), 0..40),
        query_idx in 0..QUERIES.len(),
        reply_idx in 0..REPLIES.len(),
    ) {
        let items = build_catalog(&parts);
        let catalog = InMemoryCatalog::new(items.clone());
        let engine = RecommendEngine::new(&catalog, RecommendConfig::default());
        let context = RecommendContext::new(QUERIES[query_idx], REPLIES[reply_idx])
            .with_request_id("prop");

        let audience = IntentExtractor::new()
            .extract(&context.query, &context.reply)
            .audience;
        let candidates = engine.recommend_candidates(&context, &PreferenceProfile::new());

        let filter = AudienceFilter::new();
        for candidate in &candidates {
            let class = filter.classify(&candidate.item);
            match audience {
                Audience::Women => prop_assert!(
                    !class.men_indicator,
                    "men-indicated item {} leaked into women results",
                    candidate.item.id
                ),
                Audience::Men => prop_assert!(
                    !(class.women_indicator || class.women_category),
                    "women-signaled item {} leaked into men results",
                    candidate.item.id
                ),
                Audience::Neutral => {}
            }
        }
    }

    /// Identical inputs produce identical pre-shuffle candidate sets, and
    /// identical request ids produce identical presentation order.
    #[test]
    fn deterministic_per_request(
        parts in prop::collection::vec(arb_item_parts(), 0..30),
        query_idx in 0..QUERIES.len(),
        reply_idx in 0..REPLIES.len(),
    ) {
        let items = build_catalog(&parts);
        let context = RecommendContext::new(QUERIES[query_idx], REPLIES[reply_idx])
            .with_request_id("prop-deterministic");
        let profile = PreferenceProfile::new();

        let unshuffled = RecommendConfig {
            shuffle_results: false,
            ..RecommendConfig::default()
        };

        let catalog_a = InMemoryCatalog::new(items.clone());
        let catalog_b = InMemoryCatalog::new(items);
        let engine_a = RecommendEngine::new(&catalog_a, unshuffled.clone());
        let engine_b = RecommendEngine::new(&catalog_b, unshuffled);

        let ids = |candidates: &[atelier_core::models::Candidate]| {
            candidates.iter().map(|c| c.item.id.clone()).collect::<Vec<_>>()
        };

        prop_assert_eq!(
            ids(&engine_a.recommend_candidates(&context, &profile)),
            ids(&engine_b.recommend_candidates(&context, &profile))
        );

        // With shuffling on, the same request id still pins the order.
        let shuffled = RecommendConfig::default();
        let engine_c = RecommendEngine::new(&catalog_a, shuffled.clone());
        let engine_d = RecommendEngine::new(&catalog_b, shuffled);
        prop_assert_eq!(
            ids(&engine_c.recommend_candidates(&context, &profile)),
            ids(&engine_d.recommend_candidates(&context, &profile))
        );
    }
}
