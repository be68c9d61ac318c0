//! # atelier-recommend
//!
//! The recommendation engine behind the shopping assistant. Turns
//! `(query, reply, preference profile, catalog)` into a small, ranked,
//! audience-consistent item list via a fixed-priority strategy cascade.

pub mod engine;
pub mod filter;
pub mod intent;
pub mod ranking;
pub mod strategy;

pub use engine::RecommendEngine;
