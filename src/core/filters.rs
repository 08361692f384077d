use crate::models::UserProfile;

/// Derive the gender a candidate must have to be eligible for a user
///
/// Strict two-value mapping: exactly `"Male"` maps to `"Female"`, and ANY
/// other stored value (including `"Female"`) maps to `"Male"`. The
/// asymmetry is inherited dataset behavior and is kept as-is rather than
/// generalized; callers comparing against the result must use exact string
/// equality.
#[inline]
pub fn eligibility_gender(gender: &str) -> &'static str {
    if gender == "Male" {
        "Female"
    } else {
        "Male"
    }
}

/// Check whether a profile is an eligible candidate for the derived gender
///
/// The requesting user's own row is NOT special-cased here; the candidate
/// pool is the whole table.
#[inline]
pub fn is_eligible_candidate(profile: &UserProfile, eligibility: &str) -> bool {
    profile.gender == eligibility
}
