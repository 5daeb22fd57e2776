//! Forward-pass table scanner.

use tracing::debug;

use super::classify::{is_candidate_row, is_separator_row, parse_alignments, split_cells};
use super::{Alignment, TableRegion};

/// Find every table region in `text`, in document order.
///
/// A table starts at a candidate row immediately followed by a valid
/// separator row, and extends over the greedy run of candidate rows after
/// the separator. Header + separator with no data rows is not a table.
/// Regions never overlap and never share lines; anything the scanner
/// declines to recognize is left for the surrounding text.
pub fn scan(text: &str) -> Vec<TableRegion> {
    let lines: Vec<&str> = text.lines().collect();
    let mut regions = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if !is_candidate_row(lines[i]) {
            i += 1;
            continue;
        }
        let Some(separator) = lines.get(i + 1).copied().filter(|l| is_separator_row(l)) else {
            // False positive, e.g. a lone pipe in prose.
            i += 1;
            continue;
        };

        let headers = split_cells(lines[i]);
        let mut alignments = parse_alignments(separator);
        alignments.resize(headers.len(), Alignment::None);

        let mut rows = Vec::new();
        let mut j = i + 2;
        while j < lines.len() && is_candidate_row(lines[j]) {
            let mut cells = split_cells(lines[j]);
            cells.resize(headers.len(), String::new());
            rows.push(cells);
            j += 1;
        }

        if rows.is_empty() {
            i += 1;
            continue;
        }

        debug!(start = i, end = j, columns = headers.len(), "table region");
        regions.push(TableRegion {
            source_span: lines[i..j].join("\n"),
            line_range: i..j,
            headers,
            rows,
            alignments,
        });
        i = j;
    }

    regions
}
