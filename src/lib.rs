//! Amity Match - interest-overlap match recommendation engine
//!
//! This library computes match recommendations over an in-memory table of
//! user profiles: candidates of the opposite gender are scored by how many
//! interest tags they share with the requesting user, ranked by that count,
//! and cut to the top N.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{MatchResult, RecommendError, Recommender, DEFAULT_TOP_N};
pub use crate::models::{RankedMatch, UserId, UserProfile, UserTable};
pub use crate::services::{loader, LoadError};
