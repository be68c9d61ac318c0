//! Ranking: merge → dedup by identity (keep highest score) → deterministic
//! sort → truncate → bounded seeded shuffle.
//!
//! The shuffle touches only the retained top set; excluded items are never
//! re-admitted. The seed derives from the request id so presentation order
//! is reproducible per request.

use std::collections::HashMap;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use atelier_core::models::Candidate;

/// Derive the shuffle seed from a request id.
pub fn seed_from_request_id(request_id: &str) -> u64 {
    let hash = blake3::hash(request_id.as_bytes());
    let bytes = hash.as_bytes();
    u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Dedup by item id keeping the highest score, sort by (score desc, id asc),
/// truncate to `limit`. Fully deterministic for a given input set.
pub fn rank_unshuffled(candidates: Vec<Candidate>, limit: usize) -> Vec<Candidate> {
    let mut best: HashMap<String, Candidate> = HashMap::new();
    for candidate in candidates {
        match best.get(&candidate.item.id) {
            Some(existing) if existing.score >= candidate.score => {}
            _ => {
                best.insert(candidate.item.id.clone(), candidate);
            }
        }
    }

    let mut merged: Vec<Candidate> = best.into_values().collect();
    merged.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.item.id.cmp(&b.item.id))
    });
    merged.truncate(limit);
    merged
}

/// Full ranking with the seeded presentation shuffle.
pub fn rank(candidates: Vec<Candidate>, limit: usize, seed: u64, shuffle: bool) -> Vec<Candidate> {
    let mut retained = rank_unshuffled(candidates, limit);
    if shuffle && retained.len() > 1 {
        let mut rng = SmallRng::seed_from_u64(seed);
        retained.shuffle(&mut rng);
    }
    retained
}
