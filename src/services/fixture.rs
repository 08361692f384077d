//! Canonical five-user sample dataset.
//!
//! Built on demand by the demo CLI and the test suites; nothing in the
//! library constructs this implicitly.

use crate::models::{UserProfile, UserTable};

/// The sample profiles shipped with the project
pub fn sample_profiles() -> Vec<UserProfile> {
    let rows: [(u64, u8, &str, &str, &str); 5] = [
        (1, 25, "Male", "New York", "Music, Hiking, Technology"),
        (2, 28, "Female", "San Diego", "Travel, Cooking, Reading"),
        (3, 30, "Male", "Seattle", "Sports, Technology, Movies"),
        (4, 22, "Female", "New York", "Music, Reading, Yoga"),
        (5, 26, "Female", "San Diego", "Technology, Travel, Cooking"),
    ];

    rows.into_iter()
        .map(|(user_id, age, gender, location, interests)| UserProfile {
            user_id,
            age,
            gender: gender.to_string(),
            location: location.to_string(),
            interests: interests.to_string(),
        })
        .collect()
}

/// The sample profiles as an indexed table
pub fn sample_table() -> UserTable {
    UserTable::new(sample_profiles())
}
