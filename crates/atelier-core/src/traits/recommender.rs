use crate::errors::AtelierResult;
use crate::models::{PreferenceProfile, RankedItem, RecommendContext};

/// The engine's interface to its caller.
///
/// `recommend` is total over its inputs: collaborator failures degrade to
/// fewer (possibly zero) results rather than propagating.
pub trait IRecommender {
    fn recommend(
        &self,
        context: &RecommendContext,
        profile: &PreferenceProfile,
    ) -> AtelierResult<Vec<RankedItem>>;
}
