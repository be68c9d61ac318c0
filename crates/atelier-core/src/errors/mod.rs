//! Error types, one enum per subsystem, unified under [`AtelierError`].

mod catalog_error;
mod recommend_error;

pub use catalog_error::CatalogError;
pub use recommend_error::RecommendError;

/// Top-level error for the Atelier engine and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum AtelierError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Recommend(#[from] RecommendError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Convenience result alias used across the workspace.
pub type AtelierResult<T> = Result<T, AtelierError>;
