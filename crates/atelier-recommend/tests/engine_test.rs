//! Engine behavior under collaborator failure and degraded conditions.

use chrono::Utc;

use atelier_catalog::InMemoryCatalog;
use atelier_core::config::RecommendConfig;
use atelier_core::errors::{AtelierResult, CatalogError};
use atelier_core::models::{CatalogItem, PreferenceProfile, RecommendContext, StrategyTag};
use atelier_core::traits::{ICatalog, IRecommender, IReplyGenerator};
use atelier_recommend::RecommendEngine;

fn item(id: &str, name: &str, category: &str, sub: &str) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        sub_category: sub.to_string(),
        price: 35.0,
        image: String::new(),
        created_at: Utc::now(),
        color_tags: vec![],
        size_tags: vec![],
        keywords: vec![],
    }
}

/// A catalog whose category queries always fail; the other queries work.
struct FlakyCatalog {
    inner: InMemoryCatalog,
}

impl ICatalog for FlakyCatalog {
    fn query_by_category(&self, _term: &str, _limit: usize) -> AtelierResult<Vec<CatalogItem>> {
        Err(CatalogError::Unavailable {
            reason: "category index offline".to_string(),
        }
        .into())
    }
    fn query_by_ids(&self, ids: &[String]) -> AtelierResult<Vec<CatalogItem>> {
        self.inner.query_by_ids(ids)
    }
    fn query_newest(&self, limit: usize) -> AtelierResult<Vec<CatalogItem>> {
        self.inner.query_newest(limit)
    }
    fn query_by_color(&self, colors: &[String], limit: usize) -> AtelierResult<Vec<CatalogItem>> {
        self.inner.query_by_color(colors, limit)
    }
}

#[test]
fn generator_failure_advances_to_fallback() {
    let catalog = FlakyCatalog {
        inner: InMemoryCatalog::new(vec![item("t1", "Pocket Tee", "Men's", "Tees")]),
    };
    let engine = RecommendEngine::new(&catalog, RecommendConfig::default());
    let context = RecommendContext::new("anything nice?", "We have tees.").with_request_id("r1");

    // The response-category strategy errors out; the cascade must still
    // reach the newest fallback rather than propagating the failure.
    let results = engine
        .recommend(&context, &PreferenceProfile::new())
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "t1");
    assert_eq!(results[0].strategy, Some(StrategyTag::Newest));
}

#[test]
fn expired_deadline_reads_as_empty_not_error() {
    let catalog = InMemoryCatalog::new(vec![item("t1", "Pocket Tee", "Men's", "Tees")]);
    let config = RecommendConfig {
        generator_deadline_ms: 0,
        ..RecommendConfig::default()
    };
    let engine = RecommendEngine::new(&catalog, config);
    let context = RecommendContext::new("tees?", "We have tees.").with_request_id("r1");

    let results = engine
        .recommend(&context, &PreferenceProfile::new())
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn ranked_items_carry_then_strip_strategy_tags() {
    let catalog = InMemoryCatalog::new(vec![item("d1", "Delia Dress", "Women's", "Dresses")]);
    let engine = RecommendEngine::new(&catalog, RecommendConfig::default());
    let context =
        RecommendContext::new("do you have dresses", "Yes, the Delia Dress.").with_request_id("r1");

    let results = engine
        .recommend(&context, &PreferenceProfile::new())
        .unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0].strategy.is_some());

    let display = results[0].clone().stripped();
    assert!(display.strategy.is_none());
    assert_eq!(display.id, results[0].id);
}

/// A canned reply generator standing in for the real language model.
struct ScriptedReplies;

impl IReplyGenerator for ScriptedReplies {
    fn generate(&self, _message: &str, _history: &[String]) -> AtelierResult<String> {
        Ok("Our Women's category includes the Delia Dress.".to_string())
    }
}

#[test]
fn reply_generator_output_feeds_the_engine() {
    let catalog = InMemoryCatalog::new(vec![
        item("d1", "Delia Dress", "Women's", "Dresses"),
        item("j1", "Jogger Pant", "Men's", "Bottoms"),
    ]);
    let engine = RecommendEngine::new(&catalog, RecommendConfig::default());

    let query = "do you have dresses";
    let reply = ScriptedReplies.generate(query, &[]).unwrap();
    let context = RecommendContext::new(query, reply).with_request_id("r1");

    let results = engine
        .recommend(&context, &PreferenceProfile::new())
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "d1");
}

#[test]
fn viewed_similarity_wins_when_reply_names_nothing() {
    let catalog = InMemoryCatalog::new(vec![
        item("j1", "Jogger Pant", "Men's", "Bottoms"),
        item("j2", "Track Pant", "Men's", "Bottoms"),
        item("d1", "Delia Dress", "Women's", "Dresses"),
    ]);
    let engine = RecommendEngine::new(&catalog, RecommendConfig::default());

    let mut profile = PreferenceProfile::new();
    profile.record_view(&item("j1", "Jogger Pant", "Men's", "Bottoms"));

    let context =
        RecommendContext::new("something similar to what I looked at?", "Happy to help!")
            .with_request_id("r1");
    let candidates = engine.recommend_candidates(&context, &profile);

    // The similarity strategy itself never re-suggests the viewed item
    // (the fallback top-up is allowed to, it carries no preference signal).
    assert!(candidates
        .iter()
        .all(|c| !(c.item.id == "j1" && c.strategy == StrategyTag::ViewedSimilarity)));
    assert!(candidates
        .iter()
        .any(|c| c.strategy == StrategyTag::ViewedSimilarity && c.item.id == "j2"));
}

#[test]
fn color_affinity_fires_without_history() {
    let mut sage_dress = item("d1", "Delia Dress", "Women's", "Dresses");
    sage_dress.color_tags = vec!["sage".to_string()];
    let mut black_tee = item("t1", "Pocket Tee", "Men's", "Tees");
    black_tee.color_tags = vec!["black".to_string()];

    let catalog = InMemoryCatalog::new(vec![sage_dress, black_tee]);
    let engine = RecommendEngine::new(&catalog, RecommendConfig::default());

    let mut profile = PreferenceProfile::new();
    profile.set_preferred_colors(vec!["sage".to_string()]);

    let context = RecommendContext::new("surprise me", "Sure!").with_request_id("r1");
    let candidates = engine.recommend_candidates(&context, &profile);

    assert!(!candidates.is_empty());
    assert!(candidates
        .iter()
        .all(|c| c.strategy == StrategyTag::ColorAffinity || c.strategy == StrategyTag::Newest));
    assert!(candidates.iter().any(|c| c.item.id == "d1"));
}
