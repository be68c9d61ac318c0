use crate::errors::AtelierResult;

/// Opaque natural-language reply generator.
///
/// Invoked by the caller before recommendation; the engine consumes the
/// produced text purely as a signal source and never calls this itself.
pub trait IReplyGenerator: Send + Sync {
    fn generate(&self, message: &str, history: &[String]) -> AtelierResult<String>;
}
