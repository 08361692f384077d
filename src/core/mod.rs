// Core algorithm exports
pub mod filters;
pub mod interests;
pub mod recommender;
pub mod scoring;

pub use filters::{eligibility_gender, is_eligible_candidate};
pub use interests::{tag_set, tags};
pub use recommender::{MatchResult, RecommendError, Recommender, DEFAULT_TOP_N};
pub use scoring::shared_interests;
