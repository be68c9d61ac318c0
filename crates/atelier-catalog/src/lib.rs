//! # atelier-catalog
//!
//! Implementations of the [`ICatalog`](atelier_core::traits::ICatalog) seam:
//! an in-memory snapshot for tests and embedded use, and a moka-backed
//! read-through cache with an explicit invalidation contract.

pub mod cached;
pub mod memory;

pub use cached::CachedCatalog;
pub use memory::InMemoryCatalog;
