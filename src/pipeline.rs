//! The message-rewriting entry point.
//!
//! Raw text → TSV upgrade → table scan → per-region render → splice.
//! Messages without a recognizable table are returned unchanged so the
//! hosting hook can cheaply detect that nothing happened.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::config::{RenderOptions, TableStyle};
use crate::render::{self, card, text};
use crate::scan::{self, TableRegion};
use crate::tsv;

static EXTRA_NEWLINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("newline collapse pattern"));

/// Rewrite every table in `message` per `opts`, splicing the rendered
/// form over the matched span. Surrounding text is preserved; after a
/// rewrite, runs of 3+ newlines collapse to 2 and the result is trimmed.
pub fn rewrite(message: &str, opts: &RenderOptions) -> String {
    let normalized = tsv::normalize(message);
    let regions = scan::scan(&normalized);
    if regions.is_empty() {
        return message.to_string();
    }
    debug!(
        regions = regions.len(),
        style = opts.style.as_str(),
        "rewriting tables"
    );

    let lines: Vec<&str> = normalized.lines().collect();
    let mut pieces: Vec<String> = Vec::new();
    let mut cursor = 0;
    for region in &regions {
        for line in &lines[cursor..region.line_range.start] {
            pieces.push((*line).to_string());
        }
        pieces.push(render_region(region, opts));
        cursor = region.line_range.end;
    }
    for line in &lines[cursor..] {
        pieces.push((*line).to_string());
    }

    let joined = pieces.join("\n");
    EXTRA_NEWLINES.replace_all(&joined, "\n\n").trim().to_string()
}

fn render_region(region: &TableRegion, opts: &RenderOptions) -> String {
    match opts.style {
        TableStyle::Unicode => text::render_text(
            region,
            &render::UNICODE,
            opts.show_links,
            opts.disable_link_previews,
        ),
        TableStyle::Ascii => text::render_text(
            region,
            &render::ASCII,
            opts.show_links,
            opts.disable_link_previews,
        ),
        TableStyle::Cards => {
            card::render_card(region, opts.show_links, &opts.lang, opts.disable_link_previews)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascii_opts() -> RenderOptions {
        RenderOptions {
            style: TableStyle::Ascii,
            show_links: false,
            ..RenderOptions::default()
        }
    }

    #[test]
    fn test_table_replaced_in_place() {
        let out = rewrite("before\n| A | B |\n|---|---|\n| 1 | 2 |\nafter", &ascii_opts());
        assert_eq!(
            out,
            "before\n```\n+---+---+\n| A | B |\n+---+---+\n| 1 | 2 |\n+---+---+\n```\nafter"
        );
    }

    #[test]
    fn test_message_without_tables_unchanged() {
        let text = "  just some text | with a pipe\n\n\n\nand newlines  ";
        assert_eq!(rewrite(text, &ascii_opts()), text);
    }

    #[test]
    fn test_candidate_without_separator_unchanged() {
        let text = "| A | B |\nhello\n";
        assert_eq!(rewrite(text, &ascii_opts()), text);
    }

    #[test]
    fn test_tsv_block_upgraded_and_rendered() {
        let out = rewrite("Name\tAge\nAlice\t30\nBob\t25", &ascii_opts());
        assert!(out.contains("| Name  | Age |"), "{out}");
        assert!(out.contains("| Alice | 30  |"), "{out}");
        assert!(out.contains("| Bob   | 25  |"), "{out}");
    }

    #[test]
    fn test_two_regions_rendered_independently() {
        let out = rewrite(
            "| A |\n|---|\n| 1 |\nmiddle\n| B |\n|---|\n| 2 |",
            &ascii_opts(),
        );
        assert_eq!(out.matches("```").count(), 4);
        assert!(out.contains("middle"));
    }

    #[test]
    fn test_newline_runs_collapse_after_rewrite() {
        let out = rewrite(
            "top\n\n\n\n| A |\n|---|\n| 1 |\n\n\n\nbottom\n",
            &ascii_opts(),
        );
        assert!(out.starts_with("top\n\n```"));
        assert!(out.ends_with("```\n\nbottom"));
    }

    #[test]
    fn test_card_style_dispatch() {
        let opts = RenderOptions {
            style: TableStyle::Cards,
            ..RenderOptions::default()
        };
        let out = rewrite("| A |\n|---|\n| 1 |", &opts);
        assert!(out.contains("data:image/svg+xml;base64,"));
    }
}
