use thiserror::Error;

use crate::core::{filters, interests, scoring};
use crate::models::{RankedMatch, UserId, UserTable};

/// Default number of ranked candidates returned
pub const DEFAULT_TOP_N: usize = 3;

/// Errors produced by the recommendation query
#[derive(Debug, Error)]
pub enum RecommendError {
    /// Requested id is absent from the table. Local and non-retryable.
    #[error("User {0} not found in profile table")]
    UserNotFound(UserId),

    /// The recommender was constructed over an unusable table
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result of a ranking query
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// Ranked candidates, best first, at most `top_n` entries
    pub matches: Vec<RankedMatch>,
    /// Eligible candidates before the top-N cut
    pub total_candidates: usize,
}

/// Match recommender over a read-only profile table
///
/// # Pipeline
/// 1. Look up the requesting user (O(1), first-match-wins on duplicate ids)
/// 2. Derive the eligibility gender (opposite of the user's stored gender)
/// 3. Filter the whole table to candidates of that gender
/// 4. Score each candidate by shared-interest count
/// 5. Stable sort, count descending
/// 6. Truncate to the top N
///
/// The query is a pure read: no mutation, no I/O, identical output for an
/// unchanged table. Concurrent queries against the same table are safe as
/// long as nothing mutates it.
#[derive(Debug, Clone)]
pub struct Recommender<'a> {
    table: &'a UserTable,
}

impl<'a> Recommender<'a> {
    /// Create a recommender over the supplied table
    ///
    /// The table is borrowed for the recommender's lifetime. An empty table
    /// is rejected here so the failure surfaces at construction instead of
    /// as a lookup error on the first query.
    pub fn new(table: &'a UserTable) -> Result<Self, RecommendError> {
        if table.is_empty() {
            return Err(RecommendError::Configuration(
                "user table is empty".to_string(),
            ));
        }
        Ok(Self { table })
    }

    /// Recommend the top [`DEFAULT_TOP_N`] matches for a user
    pub fn recommend_matches(&self, user_id: UserId) -> Result<Vec<UserId>, RecommendError> {
        self.recommend_top(user_id, DEFAULT_TOP_N)
    }

    /// Recommend at most `top_n` matches for a user, ids only
    pub fn recommend_top(
        &self,
        user_id: UserId,
        top_n: usize,
    ) -> Result<Vec<UserId>, RecommendError> {
        let result = self.rank_candidates(user_id, top_n)?;
        Ok(result.matches.into_iter().map(|m| m.user_id).collect())
    }

    /// Rank candidates for a user and return the scored result
    ///
    /// Candidates are every row whose gender equals the derived eligibility
    /// gender; the requesting user's own row is not excluded. Ties on
    /// shared-interest count keep the table's insertion order (the sort is
    /// stable), so callers must not assume any secondary ordering beyond
    /// that. If fewer than `top_n` candidates exist, all of them are
    /// returned.
    pub fn rank_candidates(
        &self,
        user_id: UserId,
        top_n: usize,
    ) -> Result<MatchResult, RecommendError> {
        let user = self
            .table
            .get(user_id)
            .ok_or(RecommendError::UserNotFound(user_id))?;

        let user_tags = interests::tag_set(&user.interests);
        let eligibility = filters::eligibility_gender(&user.gender);

        let mut matches: Vec<RankedMatch> = self
            .table
            .iter()
            .filter(|candidate| filters::is_eligible_candidate(candidate, eligibility))
            .map(|candidate| {
                let shared = scoring::shared_interests(&user_tags, &candidate.interests);
                RankedMatch {
                    user_id: candidate.user_id,
                    shared_interest_count: shared.len(),
                    shared_interests: shared,
                }
            })
            .collect();

        let total_candidates = matches.len();

        // Stable sort keeps insertion order among equal counts
        matches.sort_by(|a, b| b.shared_interest_count.cmp(&a.shared_interest_count));
        matches.truncate(top_n);

        Ok(MatchResult {
            matches,
            total_candidates,
        })
    }
}
