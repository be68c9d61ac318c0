use serde::{Deserialize, Serialize};

/// Shopper-targeting signal inferred from conversation text.
///
/// Computed once per request and never persisted in the profile; a session
/// may shift audience between requests without touching stored history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    Women,
    Men,
    #[default]
    Neutral,
}

impl Audience {
    /// Whether this signal restricts the result set at all.
    pub fn is_restricted(&self) -> bool {
        !matches!(self, Audience::Neutral)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Women => "women",
            Audience::Men => "men",
            Audience::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
