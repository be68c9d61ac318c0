//! Audience detection over conversation text.
//!
//! An ordered `(pattern, audience)` table, evaluated deterministically.
//! New terms are added to the table, not to control flow.

use atelier_core::models::Audience;
use regex::Regex;

/// The fixed audience term table. Word-boundary anchored so "men" never
/// fires inside "women".
const AUDIENCE_TERMS: &[(&str, Audience)] = &[
    (r"\bwomen\b", Audience::Women),
    (r"\bwoman\b", Audience::Women),
    (r"\blady\b", Audience::Women),
    (r"\bladies\b", Audience::Women),
    (r"\bwomen's\b", Audience::Women),
    (r"\bmen\b", Audience::Men),
    (r"\bman\b", Audience::Men),
    (r"\bguys\b", Audience::Men),
    (r"\bmale\b", Audience::Men),
    (r"\bmen's\b", Audience::Men),
];

pub struct AudienceDetector {
    table: Vec<(Regex, Audience)>,
}

impl AudienceDetector {
    pub fn new() -> Self {
        let table = AUDIENCE_TERMS
            .iter()
            .map(|(pattern, audience)| {
                (
                    Regex::new(pattern).expect("audience term table is static"),
                    *audience,
                )
            })
            .collect();
        Self { table }
    }

    /// Symmetric rule: only-women terms → `Women`, only-men → `Men`,
    /// both or neither → `Neutral`. Detection fails open; filtering (which
    /// consumes the result) fails closed.
    pub fn detect(&self, lowercased_text: &str) -> Audience {
        let mut women = false;
        let mut men = false;
        for (pattern, audience) in &self.table {
            if pattern.is_match(lowercased_text) {
                match audience {
                    Audience::Women => women = true,
                    Audience::Men => men = true,
                    Audience::Neutral => {}
                }
            }
        }
        match (women, men) {
            (true, false) => Audience::Women,
            (false, true) => Audience::Men,
            _ => Audience::Neutral,
        }
    }
}

impl Default for AudienceDetector {
    fn default() -> Self {
        Self::new()
    }
}
