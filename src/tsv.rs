//! Tab-separated block upgrade.
//!
//! Spreadsheet cells pasted into chat arrive as tab-delimited lines.
//! Blocks of two or more consecutive tab-bearing lines are rewritten as
//! pipe tables so the normal scanning pipeline picks them up; everything
//! else passes through untouched.

/// Whether `text` as a whole looks like pasted TSV data.
///
/// Requires at least two non-blank lines, a tab in every line, the same
/// tab count on every line, and that the text is not already a pipe
/// table (every line starting or ending with `|`).
pub fn looks_like_tsv(text: &str) -> bool {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() < 2 {
        return false;
    }
    let counts: Vec<usize> = lines.iter().map(|l| l.matches('\t').count()).collect();
    if counts[0] == 0 || counts.windows(2).any(|pair| pair[0] != pair[1]) {
        return false;
    }
    let already_piped = lines.iter().all(|l| {
        let trimmed = l.trim();
        trimmed.starts_with('|') || trimmed.ends_with('|')
    });
    !already_piped
}

/// Rewrite every block of 2+ consecutive tab-bearing lines as a pipe
/// table. A single tab-bearing line carries too little information to
/// infer a table and is emitted verbatim.
pub fn normalize(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.contains('\t') {
            block.push(line);
            continue;
        }
        flush_block(&mut block, &mut out);
        out.push(line.to_string());
    }
    flush_block(&mut block, &mut out);

    out.join("\n")
}

fn flush_block(block: &mut Vec<&str>, out: &mut Vec<String>) {
    if block.len() >= 2 {
        out.extend(block_to_markdown(block));
    } else {
        out.extend(block.iter().map(|line| (*line).to_string()));
    }
    block.clear();
}

/// First line becomes the header row; data rows are padded or truncated
/// to the header's column count.
fn block_to_markdown(block: &[&str]) -> Vec<String> {
    let headers: Vec<String> = block[0].split('\t').map(|c| c.trim().to_string()).collect();

    let mut lines = Vec::with_capacity(block.len() + 1);
    lines.push(format!("| {} |", headers.join(" | ")));
    lines.push(format!("| {} |", vec!["---"; headers.len()].join(" | ")));
    for row in &block[1..] {
        let mut cells: Vec<String> = row.split('\t').map(|c| c.trim().to_string()).collect();
        cells.resize(headers.len(), String::new());
        lines.push(format!("| {} |", cells.join(" | ")));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_tsv() {
        assert!(looks_like_tsv("Name\tAge\nAlice\t30"));
        assert!(!looks_like_tsv("Name\tAge"));
        assert!(!looks_like_tsv("no tabs\nanywhere"));
        assert!(!looks_like_tsv("a\tb\nc\td\te"));
    }

    #[test]
    fn test_pipe_table_is_not_tsv() {
        assert!(!looks_like_tsv("| a\tb |\n| c\td |"));
    }

    #[test]
    fn test_normalize_basic_block() {
        let out = normalize("Name\tAge\nAlice\t30\nBob\t25");
        assert_eq!(
            out,
            "| Name | Age |\n| --- | --- |\n| Alice | 30 |\n| Bob | 25 |"
        );
    }

    #[test]
    fn test_normalize_preserves_surrounding_text() {
        let out = normalize("intro\nA\tB\n1\t2\noutro");
        assert_eq!(out, "intro\n| A | B |\n| --- | --- |\n| 1 | 2 |\noutro");
    }

    #[test]
    fn test_single_tab_line_passes_through() {
        assert_eq!(normalize("just\tone line"), "just\tone line");
        assert_eq!(normalize("a\nx\ty\nb"), "a\nx\ty\nb");
    }

    #[test]
    fn test_ragged_rows_padded_and_truncated() {
        let out = normalize("A\tB\n1\t\n1\t2\t3");
        assert_eq!(out, "| A | B |\n| --- | --- |\n| 1 |  |\n| 1 | 2 |");
    }

    #[test]
    fn test_two_separate_blocks() {
        let out = normalize("A\tB\n1\t2\n\nC\tD\n3\t4");
        assert_eq!(
            out,
            "| A | B |\n| --- | --- |\n| 1 | 2 |\n\n| C | D |\n| --- | --- |\n| 3 | 4 |"
        );
    }

    #[test]
    fn test_non_tabular_text_unchanged() {
        assert_eq!(normalize("plain\ntext"), "plain\ntext");
        assert_eq!(normalize(""), "");
    }
}
