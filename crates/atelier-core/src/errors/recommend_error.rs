/// Recommendation subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error("strategy '{strategy}' failed: {reason}")]
    StrategyFailed { strategy: String, reason: String },

    #[error("preference store read failed for '{session_key}': {reason}")]
    ProfileUnavailable { session_key: String, reason: String },

    #[error("reply generation failed: {reason}")]
    ReplyFailed { reason: String },
}
