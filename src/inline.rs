//! Cell text tokenization into styled runs.
//!
//! The card renderer draws each cell as a sequence of runs: plain,
//! `**bold**`/`__bold__`, `*italic*`/`_italic_`, or backtick code.
//! Markdown links are resolved to their visible label before the scan so
//! link syntax never leaks into run text. Nesting is not supported; the
//! first complete match wins and scanning resumes strictly after it.

use crate::links;

/// A maximal substring of a cell sharing one formatting state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
            code: false,
        }
    }

    fn styled(text: &str, bold: bool, italic: bool, code: bool) -> Self {
        Self {
            text: text.to_string(),
            bold,
            italic,
            code,
        }
    }
}

struct SpanMatch {
    start: usize,
    end: usize,
    run: TextRun,
}

/// Split one cell's raw text into styled runs.
///
/// The concatenated run text equals the cell with link syntax resolved
/// to labels and emphasis/code delimiters stripped. A delimiter without
/// a closing counterpart stays literal text.
pub fn tokenize(cell: &str) -> Vec<TextRun> {
    let resolved = links::resolve_labels(cell);
    let mut runs = Vec::new();
    let mut rest = resolved.as_str();

    while let Some(found) = find_span(rest) {
        if found.start > 0 {
            runs.push(TextRun::plain(&rest[..found.start]));
        }
        runs.push(found.run);
        rest = &rest[found.end..];
    }
    if !rest.is_empty() || runs.is_empty() {
        runs.push(TextRun::plain(rest));
    }
    runs
}

/// Earliest complete emphasis/code span in `text`.
fn find_span(text: &str) -> Option<SpanMatch> {
    for (at, _) in text.char_indices() {
        if let Some((consumed, run)) = match_at(&text[at..]) {
            return Some(SpanMatch {
                start: at,
                end: at + consumed,
                run,
            });
        }
    }
    None
}

/// Try each span form at the start of `rest`; two-character delimiters
/// first so `**` is never read as two italic stars.
fn match_at(rest: &str) -> Option<(usize, TextRun)> {
    if let Some((consumed, inner)) = delimited(rest, "**") {
        return Some((consumed, TextRun::styled(inner, true, false, false)));
    }
    if let Some((consumed, inner)) = delimited(rest, "__") {
        return Some((consumed, TextRun::styled(inner, true, false, false)));
    }
    if let Some((consumed, inner)) = single_delimited(rest, '*') {
        return Some((consumed, TextRun::styled(inner, false, true, false)));
    }
    if let Some((consumed, inner)) = single_delimited(rest, '_') {
        return Some((consumed, TextRun::styled(inner, false, true, false)));
    }
    if let Some((consumed, inner)) = delimited(rest, "`") {
        return Some((consumed, TextRun::styled(inner, false, false, true)));
    }
    None
}

fn delimited<'a>(rest: &'a str, delim: &str) -> Option<(usize, &'a str)> {
    let body = rest.strip_prefix(delim)?;
    let close = body.find(delim)?;
    let inner = &body[..close];
    if inner.is_empty() {
        return None;
    }
    Some((close + 2 * delim.len(), inner))
}

/// Single-character emphasis where neither delimiter sits next to
/// another copy of itself (so `**` and `snake__case` stay out).
fn single_delimited(rest: &str, delim: char) -> Option<(usize, &str)> {
    let body = rest.strip_prefix(delim)?;
    if body.starts_with(delim) {
        return None;
    }
    let mut from = 0;
    while let Some(offset) = body[from..].find(delim) {
        let close = from + offset;
        if body[close + 1..].starts_with(delim) {
            from = close + 2;
            continue;
        }
        let inner = &body[..close];
        if inner.is_empty() {
            return None;
        }
        return Some((close + 2, inner));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(runs: &[TextRun]) -> Vec<&str> {
        runs.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn test_plain_text_is_one_run() {
        let runs = tokenize("hello world");
        assert_eq!(runs, vec![TextRun::plain("hello world")]);
    }

    #[test]
    fn test_empty_cell_is_one_empty_run() {
        assert_eq!(tokenize(""), vec![TextRun::plain("")]);
    }

    #[test]
    fn test_bold_run() {
        let runs = tokenize("before **bold** after");
        assert_eq!(texts(&runs), vec!["before ", "bold", " after"]);
        assert!(runs[1].bold);
        assert!(!runs[1].italic && !runs[1].code);
    }

    #[test]
    fn test_underscore_bold() {
        let runs = tokenize("__strong__");
        assert_eq!(texts(&runs), vec!["strong"]);
        assert!(runs[0].bold);
    }

    #[test]
    fn test_italic_runs() {
        let runs = tokenize("a *b* and _c_");
        assert_eq!(texts(&runs), vec!["a ", "b", " and ", "c"]);
        assert!(runs[1].italic);
        assert!(runs[3].italic);
    }

    #[test]
    fn test_code_run() {
        let runs = tokenize("run `cargo test` now");
        assert_eq!(texts(&runs), vec!["run ", "cargo test", " now"]);
        assert!(runs[1].code);
    }

    #[test]
    fn test_double_star_not_read_as_italics() {
        let runs = tokenize("**x**");
        assert_eq!(runs.len(), 1);
        assert!(runs[0].bold && !runs[0].italic);
    }

    #[test]
    fn test_unclosed_delimiter_stays_literal() {
        assert_eq!(tokenize("a *b"), vec![TextRun::plain("a *b")]);
        assert_eq!(tokenize("`x"), vec![TextRun::plain("`x")]);
    }

    #[test]
    fn test_first_match_wins_no_nesting() {
        let runs = tokenize("**a *b* c**");
        assert_eq!(texts(&runs), vec!["a *b* c"]);
        assert!(runs[0].bold);
    }

    #[test]
    fn test_link_resolved_before_spans() {
        let runs = tokenize("see [**Docs**](https://example.com)");
        assert_eq!(texts(&runs), vec!["see ", "Docs"]);
        assert!(runs[1].bold);
    }

    #[test]
    fn test_concatenation_matches_resolved_text() {
        let cell = "mix **b** _i_ `c` tail";
        let joined: String = tokenize(cell).iter().map(|r| r.text.as_str()).collect();
        assert_eq!(joined, "mix b i c tail");
    }
}
