use std::collections::HashSet;

/// Iterate over the interest tags in a raw comma-delimited string
///
/// Tags are trimmed of surrounding whitespace; empty segments are dropped.
/// Matching elsewhere is exact-string and case-sensitive, so no further
/// normalization happens here.
pub fn tags(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|tag| !tag.is_empty())
}

/// Parse a raw interest string into a tag set
pub fn tag_set(raw: &str) -> HashSet<&str> {
    tags(raw).collect()
}
