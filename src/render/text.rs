//! Fixed-width text table rendering.

use crate::links::{self, LinkEntry};
use crate::render::GlyphSet;
use crate::scan::{Alignment, TableRegion};
use crate::width::display_width;

const LINK_MARKER: &str = "🔗";

/// Render a table region as a fenced fixed-width block.
///
/// Links in headers and cells are replaced by their label text; when
/// `show_links` is set and any links were found, they are appended below
/// the fence as markdown link lines. `disable_link_previews` wraps the
/// emitted URLs in `<...>` so chat clients skip the unfurl.
pub fn render_text(
    region: &TableRegion,
    glyphs: &GlyphSet,
    show_links: bool,
    disable_link_previews: bool,
) -> String {
    let links = links::extract(
        region
            .headers
            .iter()
            .chain(region.rows.iter().flatten())
            .map(String::as_str),
    );

    let headers: Vec<String> = region.headers.iter().map(|h| links::substitute(h)).collect();
    let rows: Vec<Vec<String>> = region
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| links::substitute(cell)).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(display_width(cell));
        }
    }

    let mut out = String::new();
    out.push_str("```\n");
    out.push_str(&border(
        &widths,
        glyphs.top_left,
        glyphs.tee_down,
        glyphs.top_right,
        glyphs.horizontal,
    ));
    out.push('\n');
    out.push_str(&content_row(
        &headers,
        &widths,
        &region.alignments,
        glyphs.vertical,
    ));
    out.push('\n');
    out.push_str(&border(
        &widths,
        glyphs.tee_right,
        glyphs.cross,
        glyphs.tee_left,
        glyphs.horizontal,
    ));
    out.push('\n');
    for row in &rows {
        out.push_str(&content_row(row, &widths, &region.alignments, glyphs.vertical));
        out.push('\n');
    }
    out.push_str(&border(
        &widths,
        glyphs.bottom_left,
        glyphs.tee_up,
        glyphs.bottom_right,
        glyphs.horizontal,
    ));
    out.push_str("\n```");

    if show_links && !links.is_empty() {
        out.push('\n');
        for link in &links {
            out.push('\n');
            out.push_str(&link_line(link, disable_link_previews));
        }
    }

    out
}

fn link_line(link: &LinkEntry, disable_link_previews: bool) -> String {
    if disable_link_previews {
        format!("{LINK_MARKER} [{}](<{}>)", link.label, link.url)
    } else {
        format!("{LINK_MARKER} [{}]({})", link.label, link.url)
    }
}

fn border(widths: &[usize], left: char, middle: char, right: char, horizontal: char) -> String {
    let mut out = String::new();
    out.push(left);
    for (idx, width) in widths.iter().enumerate() {
        for _ in 0..width + 2 {
            out.push(horizontal);
        }
        if idx + 1 < widths.len() {
            out.push(middle);
        }
    }
    out.push(right);
    out
}

fn content_row(
    cells: &[String],
    widths: &[usize],
    alignments: &[Alignment],
    vertical: char,
) -> String {
    let mut out = String::new();
    out.push(vertical);
    for (idx, width) in widths.iter().enumerate() {
        let content = cells.get(idx).map_or("", String::as_str);
        let padding = width.saturating_sub(display_width(content));

        out.push(' ');
        match alignments.get(idx).copied().unwrap_or(Alignment::None) {
            Alignment::Right => {
                out.push_str(&" ".repeat(padding));
                out.push_str(content);
            }
            Alignment::Center => {
                let left = padding / 2;
                out.push_str(&" ".repeat(left));
                out.push_str(content);
                out.push_str(&" ".repeat(padding - left));
            }
            Alignment::Left | Alignment::None => {
                out.push_str(content);
                out.push_str(&" ".repeat(padding));
            }
        }
        out.push(' ');
        out.push(vertical);
    }
    out
}
