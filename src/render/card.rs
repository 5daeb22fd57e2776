//! Card rendering: the table as an SVG image embedded as a data URL.
//!
//! Text placement uses fixed per-character pixel constants rather than
//! real font metrics, which keeps the renderer a pure function with no
//! font database or rasterizer behind it. The extracted links and the
//! localized usage hint are PREPENDED: the hosting chat client's inline
//! image handling can swallow markdown that follows an image reference.

use std::fmt::Write;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::i18n;
use crate::inline::{self, TextRun};
use crate::links;
use crate::scan::{Alignment, TableRegion};

// ---------------------------------------------------------------------------
// Layout constants (logical pixels)
// ---------------------------------------------------------------------------
const FONT_SIZE: f32 = 14.0;
/// Approximate advance per character for proportional text.
const CHAR_WIDTH: f32 = 7.5;
/// Monospace code runs are wider per character.
const CODE_CHAR_WIDTH: f32 = 8.4;
const ROW_HEIGHT: f32 = 32.0;
const CELL_PAD_X: f32 = 12.0;
/// Per-character advance used for column sizing.
const COL_PX_PER_CHAR: f32 = 9.0;
const COL_MIN_PX: f32 = 80.0;
/// Vertical offset of the text baseline inside a row.
const BASELINE: f32 = ROW_HEIGHT * 0.68;

const FONT_FAMILY: &str = "'Segoe UI', 'Helvetica Neue', 'Noto Sans', sans-serif";

// ---------------------------------------------------------------------------
// Color palette
// ---------------------------------------------------------------------------
const HEADER_BG: &str = "#E8ECF1";
const ROW_EVEN: &str = "#FFFFFF";
const ROW_ODD: &str = "#F6F8FA";
const HEADER_TEXT: &str = "#1B1F24";
const TEXT_COLOR: &str = "#24292F";
const BORDER_COLOR: &str = "#D0D7DE";

/// Render a table region as a card: optional link list and usage hint,
/// then an image reference carrying the SVG as a data URL.
pub fn render_card(
    region: &TableRegion,
    show_links: bool,
    lang: &str,
    disable_link_previews: bool,
) -> String {
    let links = links::extract(
        region
            .headers
            .iter()
            .chain(region.rows.iter().flatten())
            .map(String::as_str),
    );

    let header_runs: Vec<Vec<TextRun>> =
        region.headers.iter().map(|h| inline::tokenize(h)).collect();
    let row_runs: Vec<Vec<Vec<TextRun>>> = region
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| inline::tokenize(cell)).collect())
        .collect();

    let mut col_chars: Vec<usize> = header_runs.iter().map(|runs| plain_len(runs)).collect();
    for row in &row_runs {
        for (idx, runs) in row.iter().enumerate() {
            col_chars[idx] = col_chars[idx].max(plain_len(runs));
        }
    }
    let col_px: Vec<f32> = col_chars
        .iter()
        .map(|&chars| {
            let chars = chars as f32;
            (COL_PX_PER_CHAR * chars).max(COL_MIN_PX) + 2.0 * CELL_PAD_X
        })
        .collect();

    let svg = build_svg(&header_runs, &row_runs, &region.alignments, &col_px);
    let data_url = format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg));

    let mut out = String::new();
    if !links.is_empty() {
        let strings = i18n::lookup(lang);
        if show_links {
            let _ = writeln!(out, "**{}**", strings.links_heading);
            for link in &links {
                if disable_link_previews {
                    let _ = writeln!(out, "- [{}](<{}>)", link.label, link.url);
                } else {
                    let _ = writeln!(out, "- [{}]({})", link.label, link.url);
                }
            }
            out.push('\n');
            out.push_str(strings.links_shown);
        } else {
            out.push_str(strings.links_hidden);
        }
        out.push_str("\n\n");
    }
    let _ = write!(out, "![table]({data_url})");
    out
}

fn plain_len(runs: &[TextRun]) -> usize {
    runs.iter().map(|run| run.text.chars().count()).sum()
}

/// Estimated pixel width of a cell's runs.
fn runs_px(runs: &[TextRun]) -> f32 {
    runs.iter()
        .map(|run| {
            let per_char = if run.code { CODE_CHAR_WIDTH } else { CHAR_WIDTH };
            run.text.chars().count() as f32 * per_char
        })
        .sum()
}

fn build_svg(
    header_runs: &[Vec<TextRun>],
    row_runs: &[Vec<Vec<TextRun>>],
    alignments: &[Alignment],
    col_px: &[f32],
) -> String {
    let total_w = col_px.iter().sum::<f32>().ceil();
    let total_h = (ROW_HEIGHT * (row_runs.len() + 1) as f32).ceil();

    let mut s = String::with_capacity(4096);
    let _ = write!(
        s,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{total_w}" height="{total_h}" viewBox="0 0 {total_w} {total_h}" font-family="{FONT_FAMILY}" font-size="{FONT_SIZE}">"#,
    );

    emit_row(&mut s, header_runs, alignments, col_px, 0.0, HEADER_BG, HEADER_TEXT, true);
    for (row_idx, row) in row_runs.iter().enumerate() {
        let fill = if row_idx % 2 == 0 { ROW_EVEN } else { ROW_ODD };
        let top = ROW_HEIGHT * (row_idx + 1) as f32;
        emit_row(&mut s, row, alignments, col_px, top, fill, TEXT_COLOR, false);
    }

    // Outer border on top of the cell fills.
    let _ = write!(
        s,
        r#"<rect width="{total_w}" height="{total_h}" fill="none" stroke="{BORDER_COLOR}" stroke-width="1"/>"#,
    );
    s.push_str("</svg>");
    s
}

#[allow(clippy::too_many_arguments)]
fn emit_row(
    s: &mut String,
    cells: &[Vec<TextRun>],
    alignments: &[Alignment],
    col_px: &[f32],
    top: f32,
    fill: &str,
    text_color: &str,
    header: bool,
) {
    let weight = if header { "600" } else { "400" };
    let baseline = top + BASELINE;

    let mut cell_x = 0.0_f32;
    for (col_idx, &col_w) in col_px.iter().enumerate() {
        let _ = write!(
            s,
            r#"<rect x="{cell_x}" y="{top}" width="{col_w}" height="{ROW_HEIGHT}" fill="{fill}"/>"#,
        );

        if let Some(runs) = cells.get(col_idx) {
            let text_px = runs_px(runs);
            let align = alignments.get(col_idx).copied().unwrap_or(Alignment::None);
            let tx = match align {
                Alignment::Right => cell_x + col_w - CELL_PAD_X - text_px,
                Alignment::Center => cell_x + (col_w - text_px) / 2.0,
                Alignment::Left | Alignment::None => cell_x + CELL_PAD_X,
            };
            let _ = write!(
                s,
                r#"<text x="{tx}" y="{baseline}" fill="{text_color}" font-weight="{weight}">"#,
            );
            for run in runs {
                emit_run(s, run);
            }
            s.push_str("</text>");
        }
        cell_x += col_w;
    }
}

fn emit_run(s: &mut String, run: &TextRun) {
    let escaped = xml_escape(&run.text);
    if !run.bold && !run.italic && !run.code {
        s.push_str(&escaped);
        return;
    }
    s.push_str("<tspan");
    if run.bold {
        s.push_str(r#" font-weight="700""#);
    }
    if run.italic {
        s.push_str(r#" font-style="italic""#);
    }
    if run.code {
        s.push_str(r#" font-family="monospace""#);
    }
    let _ = write!(s, ">{escaped}</tspan>");
}

fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;

    use crate::scan::scan;

    use super::*;

    fn region(text: &str) -> TableRegion {
        scan(text).into_iter().next().expect("test table parses")
    }

    fn decode_svg(out: &str) -> String {
        let start = out
            .find("data:image/svg+xml;base64,")
            .expect("data url present")
            + "data:image/svg+xml;base64,".len();
        let end = out[start..].find(')').expect("image ref closes") + start;
        let bytes = STANDARD.decode(&out[start..end]).expect("valid base64");
        String::from_utf8(bytes).expect("svg is utf-8")
    }

    #[test]
    fn test_card_is_image_reference_with_data_url() {
        let out = render_card(&region("| A | B |\n|---|---|\n| 1 | 2 |"), true, "en", false);
        assert!(out.starts_with("![table](data:image/svg+xml;base64,"));
        assert!(out.ends_with(')'));
        let svg = decode_svg(&out);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_cells_become_rects_and_text() {
        let svg = decode_svg(&render_card(
            &region("| A | B |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |"),
            false,
            "en",
            false,
        ));
        // 2 columns x 3 rows of cell fills plus the outer border rect.
        assert_eq!(svg.matches("<rect").count(), 7);
        assert_eq!(svg.matches("<text").count(), 6);
        assert!(svg.contains(HEADER_BG));
    }

    #[test]
    fn test_styled_runs_become_tspans() {
        let svg = decode_svg(&render_card(
            &region("| H |\n|---|\n| **b** and `c` |"),
            false,
            "en",
            false,
        ));
        assert!(svg.contains(r#"<tspan font-weight="700">b</tspan>"#));
        assert!(svg.contains(r#"<tspan font-family="monospace">c</tspan>"#));
    }

    #[test]
    fn test_cell_text_is_xml_escaped() {
        let svg = decode_svg(&render_card(
            &region("| H |\n|---|\n| a<b>&\"c\" |"),
            false,
            "en",
            false,
        ));
        assert!(svg.contains("a&lt;b&gt;&amp;&quot;c&quot;"));
        assert!(!svg.contains("a<b>"));
    }

    #[test]
    fn test_links_prepended_with_heading_and_hint() {
        let out = render_card(
            &region("| Site |\n|---|\n| [Docs](https://docs.example.com) |"),
            true,
            "en",
            false,
        );
        assert!(out.starts_with("**Links in this table**\n"));
        assert!(out.contains("- [Docs](https://docs.example.com)"));
        assert!(out.contains("`/table links off`"));
        let image_at = out.find("![table](").expect("image present");
        let hint_at = out.find("`/table links off`").expect("hint present");
        assert!(hint_at < image_at, "links and hint come before the image");
    }

    #[test]
    fn test_hidden_links_still_hint() {
        let out = render_card(
            &region("| Site |\n|---|\n| https://example.com |"),
            false,
            "en",
            false,
        );
        assert!(!out.contains("**Links in this table**"));
        assert!(!out.contains("- ["));
        assert!(out.contains("`/table links on`"));
    }

    #[test]
    fn test_localized_hint() {
        let out = render_card(
            &region("| Site |\n|---|\n| https://example.com |"),
            true,
            "de",
            false,
        );
        assert!(out.starts_with("**Links in dieser Tabelle**\n"));
    }

    #[test]
    fn test_no_links_is_image_only() {
        let out = render_card(&region("| A |\n|---|\n| 1 |"), true, "en", false);
        assert!(out.starts_with("![table]("));
        assert!(!out.contains("Links"));
    }

    #[test]
    fn test_anchor_links_skipped() {
        let out = render_card(&region("| A |\n|---|\n| [top](#top) |"), true, "en", false);
        assert!(out.starts_with("![table]("), "anchor-only link ignored: {out}");
    }

    #[test]
    fn test_column_width_floor() {
        // A 1-char column still gets the 80px minimum plus padding.
        let svg = decode_svg(&render_card(&region("| A |\n|---|\n| 1 |"), false, "en", false));
        assert!(svg.contains(r#"width="104""#), "80 + 2*12 padding: {svg}");
    }
}
