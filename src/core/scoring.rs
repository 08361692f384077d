use std::collections::HashSet;

use crate::core::interests;

/// Collect the candidate's interest tags that the requesting user also has
///
/// Tags come back in the candidate's declaration order, deduplicated, so a
/// repeated tag never counts twice. The shared-interest count used for
/// ranking is the length of the returned vector.
pub fn shared_interests(user_tags: &HashSet<&str>, candidate_interests: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut shared = Vec::new();

    for tag in interests::tags(candidate_interests) {
        if seen.insert(tag) && user_tags.contains(tag) {
            shared.push(tag.to_string());
        }
    }

    shared
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::interests::tag_set;

    #[test]
    fn test_shared_interests_overlap() {
        let user_tags = tag_set("Music, Hiking, Technology");
        let shared = shared_interests(&user_tags, "Technology, Travel, Music");

        assert_eq!(shared, vec!["Technology", "Music"]);
    }

    #[test]
    fn test_no_overlap() {
        let user_tags = tag_set("Music, Hiking");
        assert!(shared_interests(&user_tags, "Travel, Cooking").is_empty());
    }

    #[test]
    fn test_duplicate_candidate_tag_counts_once() {
        let user_tags = tag_set("Music");
        let shared = shared_interests(&user_tags, "Music, Music, Music");

        assert_eq!(shared, vec!["Music"]);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let user_tags = tag_set("Music");
        assert!(shared_interests(&user_tags, "music").is_empty());
    }

    #[test]
    fn test_empty_interest_string() {
        let user_tags = tag_set("Music");
        assert!(shared_interests(&user_tags, "").is_empty());
    }
}
