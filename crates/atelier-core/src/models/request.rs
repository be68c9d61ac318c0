use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::DEFAULT_RESULT_LIMIT;

/// One recommendation request: the user's message, the assistant's reply,
/// and presentation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendContext {
    /// The user's free-text message.
    pub query: String,
    /// The generated assistant reply. Opaque text; consumed only as a
    /// signal source.
    pub reply: String,
    /// Maximum number of items to return.
    pub limit: usize,
    /// Request identifier. Seeds the presentation shuffle, so repeated
    /// identical requests with the same id produce the same order.
    pub request_id: String,
}

impl RecommendContext {
    pub fn new(query: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            reply: reply.into(),
            limit: DEFAULT_RESULT_LIMIT,
            request_id: Uuid::new_v4().to_string(),
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Pin the request id, and therefore the shuffle order. Used by tests.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }
}
