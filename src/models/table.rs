use std::collections::HashMap;

use crate::models::{UserId, UserProfile};

/// In-memory snapshot of user profiles, indexed by user id
///
/// Rows keep their insertion order (iteration and tie-breaking depend on
/// it); the id index gives O(1) lookup. The table is read-only once built.
///
/// If two rows share a `user_id` the index keeps the FIRST one, so lookups
/// are first-match-wins. Duplicate ids are a data-quality violation, not an
/// error.
#[derive(Debug, Clone, Default)]
pub struct UserTable {
    rows: Vec<UserProfile>,
    index: HashMap<UserId, usize>,
}

impl UserTable {
    pub fn new(profiles: Vec<UserProfile>) -> Self {
        let mut index = HashMap::with_capacity(profiles.len());
        for (pos, profile) in profiles.iter().enumerate() {
            index.entry(profile.user_id).or_insert(pos);
        }
        Self {
            rows: profiles,
            index,
        }
    }

    /// Look up a profile by id
    pub fn get(&self, user_id: UserId) -> Option<&UserProfile> {
        self.index.get(&user_id).map(|&pos| &self.rows[pos])
    }

    pub fn contains(&self, user_id: UserId) -> bool {
        self.index.contains_key(&user_id)
    }

    /// Iterate over all rows in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &UserProfile> {
        self.rows.iter()
    }

    /// Number of rows, duplicates included
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<UserProfile> for UserTable {
    fn from_iter<I: IntoIterator<Item = UserProfile>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(user_id: UserId, gender: &str, interests: &str) -> UserProfile {
        UserProfile {
            user_id,
            age: 25,
            gender: gender.to_string(),
            location: "New York".to_string(),
            interests: interests.to_string(),
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let table = UserTable::new(vec![
            profile(1, "Male", "Music"),
            profile(2, "Female", "Travel"),
        ]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(2).unwrap().gender, "Female");
        assert!(table.get(99).is_none());
    }

    #[test]
    fn test_duplicate_id_first_match_wins() {
        let table = UserTable::new(vec![
            profile(7, "Male", "Music"),
            profile(7, "Female", "Travel"),
        ]);

        // Both rows stay in the table, but lookups resolve to the first
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(7).unwrap().gender, "Male");
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let table: UserTable = vec![
            profile(3, "Male", "Sports"),
            profile(1, "Female", "Music"),
            profile(2, "Male", "Travel"),
        ]
        .into_iter()
        .collect();

        let ids: Vec<UserId> = table.iter().map(|p| p.user_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_empty_table() {
        let table = UserTable::new(vec![]);
        assert!(table.is_empty());
        assert!(table.get(1).is_none());
    }
}
