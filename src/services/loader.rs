//! Dataset loading collaborator.
//!
//! The recommender core never does I/O; this module turns an external
//! tabular dataset (CSV with a header row, or a JSON array of profile
//! objects) into a [`UserTable`] snapshot.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::models::{UserProfile, UserTable};

/// Dataset columns expected in a CSV header
const COLUMNS: [&str; 5] = ["UserID", "Age", "Gender", "Location", "Interests"];

/// Errors that can occur while loading a dataset
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing column in header: {column}")]
    MissingColumn { column: String },

    #[error("Parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Invalid value for {field} at line {line}: {value}")]
    InvalidValue {
        field: String,
        value: String,
        line: usize,
    },
}

/// Load a user table from a CSV file
pub fn load_csv_path<P: AsRef<Path>>(path: P) -> Result<UserTable, LoadError> {
    let content = fs::read_to_string(path)?;
    load_csv_str(&content)
}

/// Load a user table from CSV text
///
/// The first non-empty line is the header and must name all five dataset
/// columns (`UserID`, `Age`, `Gender`, `Location`, `Interests`) in any
/// order. Fields may be double-quoted; interest lists usually are, since
/// they contain commas. Blank lines are skipped.
pub fn load_csv_str(content: &str) -> Result<UserTable, LoadError> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_line_no, header) = lines.next().ok_or(LoadError::Parse {
        line: 1,
        reason: "dataset has no header row".to_string(),
    })?;

    let header_fields = split_csv_line(header);
    let positions = column_positions(&header_fields, header_line_no)?;

    let mut profiles = Vec::new();
    for (line_no, line) in lines {
        let fields = split_csv_line(line);
        if fields.len() != header_fields.len() {
            return Err(LoadError::Parse {
                line: line_no,
                reason: format!(
                    "expected {} fields but found {}",
                    header_fields.len(),
                    fields.len()
                ),
            });
        }
        profiles.push(parse_row(&fields, &positions, line_no)?);
    }

    tracing::debug!("Loaded {} profiles from CSV dataset", profiles.len());
    Ok(UserTable::new(profiles))
}

/// Load a user table from a JSON file containing an array of profiles
pub fn load_json_path<P: AsRef<Path>>(path: P) -> Result<UserTable, LoadError> {
    let content = fs::read_to_string(path)?;
    load_json_str(&content)
}

/// Load a user table from JSON text
pub fn load_json_str(content: &str) -> Result<UserTable, LoadError> {
    let profiles: Vec<UserProfile> = serde_json::from_str(content)?;
    tracing::debug!("Loaded {} profiles from JSON dataset", profiles.len());
    Ok(UserTable::new(profiles))
}

/// Positions of the five dataset columns within a header row
struct ColumnPositions {
    user_id: usize,
    age: usize,
    gender: usize,
    location: usize,
    interests: usize,
}

fn column_positions(header: &[String], line: usize) -> Result<ColumnPositions, LoadError> {
    let find = |column: &str| -> Result<usize, LoadError> {
        header
            .iter()
            .position(|field| field == column)
            .ok_or_else(|| LoadError::MissingColumn {
                column: column.to_string(),
            })
    };

    // Reject headers that repeat a column; position() would silently bind
    // every duplicate to the first occurrence
    for (idx, field) in header.iter().enumerate() {
        if COLUMNS.contains(&field.as_str()) && header[..idx].contains(field) {
            return Err(LoadError::Parse {
                line,
                reason: format!("duplicate column in header: {field}"),
            });
        }
    }

    Ok(ColumnPositions {
        user_id: find("UserID")?,
        age: find("Age")?,
        gender: find("Gender")?,
        location: find("Location")?,
        interests: find("Interests")?,
    })
}

fn parse_row(
    fields: &[String],
    positions: &ColumnPositions,
    line: usize,
) -> Result<UserProfile, LoadError> {
    let user_id = fields[positions.user_id]
        .trim()
        .parse()
        .map_err(|_| LoadError::InvalidValue {
            field: "UserID".to_string(),
            value: fields[positions.user_id].clone(),
            line,
        })?;

    let age = fields[positions.age]
        .trim()
        .parse()
        .map_err(|_| LoadError::InvalidValue {
            field: "Age".to_string(),
            value: fields[positions.age].clone(),
            line,
        })?;

    Ok(UserProfile {
        user_id,
        age,
        gender: fields[positions.gender].trim().to_string(),
        location: fields[positions.location].trim().to_string(),
        interests: fields[positions.interests].clone(),
    })
}

/// Split one CSV line into fields, honoring double quotes
///
/// Quoted fields may contain commas; `""` inside a quoted field is an
/// escaped quote. This covers the dataset format; it is not a general CSV
/// reader (no embedded newlines).
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current = String::new();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
UserID,Age,Gender,Location,Interests
1,25,Male,New York,\"Music, Hiking, Technology\"
2,28,Female,San Diego,\"Travel, Cooking, Reading\"
";

    #[test]
    fn test_load_csv_basic() {
        let table = load_csv_str(SAMPLE_CSV).unwrap();

        assert_eq!(table.len(), 2);
        let user = table.get(1).unwrap();
        assert_eq!(user.gender, "Male");
        assert_eq!(user.location, "New York");
        assert_eq!(user.interests, "Music, Hiking, Technology");
    }

    #[test]
    fn test_load_csv_reordered_columns() {
        let csv = "\
Gender,UserID,Interests,Age,Location
Female,9,\"Yoga, Reading\",31,Seattle
";
        let table = load_csv_str(csv).unwrap();
        let user = table.get(9).unwrap();

        assert_eq!(user.age, 31);
        assert_eq!(user.interests, "Yoga, Reading");
    }

    #[test]
    fn test_load_csv_skips_blank_lines() {
        let csv = "UserID,Age,Gender,Location,Interests\n\n1,25,Male,Austin,Music\n\n";
        let table = load_csv_str(csv).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_escaped_quote_in_field() {
        let csv = "UserID,Age,Gender,Location,Interests\n1,25,Male,\"\"\"The\"\" City\",Music\n";
        let table = load_csv_str(csv).unwrap();
        assert_eq!(table.get(1).unwrap().location, "\"The\" City");
    }

    #[test]
    fn test_missing_column_is_error() {
        let csv = "UserID,Age,Gender,Location\n1,25,Male,Austin\n";
        assert!(matches!(
            load_csv_str(csv),
            Err(LoadError::MissingColumn { column }) if column == "Interests"
        ));
    }

    #[test]
    fn test_duplicate_column_is_error() {
        let csv = "UserID,Age,Gender,Gender,Location,Interests\n";
        assert!(matches!(load_csv_str(csv), Err(LoadError::Parse { .. })));
    }

    #[test]
    fn test_bad_user_id_is_typed_error() {
        let csv = "UserID,Age,Gender,Location,Interests\nabc,25,Male,Austin,Music\n";
        assert!(matches!(
            load_csv_str(csv),
            Err(LoadError::InvalidValue { field, line: 2, .. }) if field == "UserID"
        ));
    }

    #[test]
    fn test_field_count_mismatch_is_error() {
        let csv = "UserID,Age,Gender,Location,Interests\n1,25,Male,Austin\n";
        assert!(matches!(
            load_csv_str(csv),
            Err(LoadError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_empty_input_is_error() {
        assert!(matches!(load_csv_str(""), Err(LoadError::Parse { .. })));
    }

    #[test]
    fn test_load_json() {
        let json = r#"[
            {"UserID": 1, "Age": 25, "Gender": "Male", "Location": "New York", "Interests": "Music, Hiking"},
            {"UserID": 2, "Age": 28, "Gender": "Female", "Location": "San Diego", "Interests": "Travel"}
        ]"#;
        let table = load_json_str(json).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(2).unwrap().interests, "Travel");
    }

    #[test]
    fn test_load_json_malformed_is_error() {
        assert!(matches!(load_json_str("{"), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_csv_and_json_loaders_agree() {
        let json = r#"[
            {"UserID": 1, "Age": 25, "Gender": "Male", "Location": "New York", "Interests": "Music, Hiking, Technology"},
            {"UserID": 2, "Age": 28, "Gender": "Female", "Location": "San Diego", "Interests": "Travel, Cooking, Reading"}
        ]"#;
        let from_csv = load_csv_str(SAMPLE_CSV).unwrap();
        let from_json = load_json_str(json).unwrap();

        assert_eq!(from_csv.len(), from_json.len());
        for user in from_csv.iter() {
            let other = from_json.get(user.user_id).unwrap();
            assert_eq!(user.gender, other.gender);
            assert_eq!(user.interests, other.interests);
        }
    }
}
