//! Cross-cutting candidate filters: audience consistency, narrow-category
//! exclusion, and the final safety re-check.

pub mod audience;
pub mod narrow;
pub mod safety;

pub use audience::{AudienceClass, AudienceFilter};
pub use narrow::{NarrowCategoryFilter, NarrowRule};
pub use safety::SafetyValidator;
