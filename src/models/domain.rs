use serde::{Deserialize, Serialize};

/// Unique identifier for a user
pub type UserId = u64;

/// User profile row from the matching dataset
///
/// Field names follow the dataset columns (`UserID`, `Age`, ...). `gender`
/// is kept as a free string: the dataset carries "Male"/"Female" today, and
/// the eligibility mapping treats anything that is not exactly "Male" the
/// same way (see [`crate::core::filters::eligibility_gender`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "UserID")]
    pub user_id: UserId,
    /// Informational only, unused by the current ranking logic
    #[serde(rename = "Age")]
    pub age: u8,
    #[serde(rename = "Gender")]
    pub gender: String,
    /// Informational only, unused by the current ranking logic
    #[serde(rename = "Location")]
    pub location: String,
    /// Raw comma-delimited interest tags, e.g. "Music, Hiking, Technology".
    /// Parsed into a tag set at scoring time.
    #[serde(rename = "Interests")]
    pub interests: String,
}

/// Scored candidate produced by the recommender
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(rename = "sharedInterestCount")]
    pub shared_interest_count: usize,
    /// Shared tags in the candidate's declaration order
    #[serde(rename = "sharedInterests")]
    pub shared_interests: Vec<String>,
}
