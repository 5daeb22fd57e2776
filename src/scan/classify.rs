//! Line classification for table scanning.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Alignment;

/// Optional leading colon, one or more dashes, optional trailing colon.
static SEPARATOR_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^:?-+:?$").expect("separator segment pattern"));

/// A line that could be a table row: it contains at least one pipe.
///
/// Intentionally permissive; the scanner weeds out false positives by
/// requiring a separator row on the following line.
pub fn is_candidate_row(line: &str) -> bool {
    line.trim().contains('|')
}

/// A valid alignment-separator row such as `|:---|---:|:---:|`.
pub fn is_separator_row(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return false;
    }
    let segments = split_unbounded(trimmed);
    !segments.is_empty()
        && segments
            .iter()
            .all(|segment| SEPARATOR_SEGMENT.is_match(segment.trim()))
}

/// Split a row into trimmed cells, stripping one optional bounding pipe
/// on each side.
pub fn split_cells(line: &str) -> Vec<String> {
    split_unbounded(line.trim())
        .into_iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Per-column alignment from a separator row's colon placement.
pub fn parse_alignments(separator: &str) -> Vec<Alignment> {
    split_cells(separator)
        .iter()
        .map(|segment| {
            match (segment.starts_with(':'), segment.ends_with(':')) {
                (true, true) => Alignment::Center,
                (false, true) => Alignment::Right,
                (true, false) => Alignment::Left,
                (false, false) => Alignment::None,
            }
        })
        .collect()
}

fn split_unbounded(trimmed: &str) -> Vec<&str> {
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').collect()
}
