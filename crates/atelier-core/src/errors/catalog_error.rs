/// Catalog collaborator errors.
///
/// "No matches" is never an error; collaborators return an empty list.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("catalog query timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    #[error("malformed catalog record '{id}': {reason}")]
    MalformedRecord { id: String, reason: String },
}
