// Model exports
pub mod domain;
pub mod table;

pub use domain::{RankedMatch, UserId, UserProfile};
pub use table::UserTable;
