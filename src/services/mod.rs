// Service exports
pub mod fixture;
pub mod loader;

pub use loader::{load_csv_path, load_csv_str, load_json_path, load_json_str, LoadError};
