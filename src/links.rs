//! Link extraction, deduplication and substitution.
//!
//! Cells can carry markdown links (`[label](url)`) and bare `http(s)`
//! URLs. Both renderers collect them into one order-preserving list,
//! deduplicated by a normalized URL key so `https://example.com`,
//! `https://www.example.com/` and `HTTP://EXAMPLE.COM` count as one.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

/// A hyperlink discovered in table cell text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub label: String,
    pub url: String,
}

static MD_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("markdown link pattern"));
static BARE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s|<>)]+").expect("bare url pattern"));

/// Replace every markdown link with its visible label.
pub fn resolve_labels(text: &str) -> String {
    MD_LINK.replace_all(text, "$1").into_owned()
}

/// Replace markdown links and bare URLs with their label text in place.
///
/// A bare URL's label is its hostname without a leading `www.`, falling
/// back to the URL itself when no hostname can be parsed.
pub fn substitute(text: &str) -> String {
    let resolved = resolve_labels(text);
    BARE_URL
        .replace_all(&resolved, |caps: &Captures| bare_label(&caps[0]))
        .into_owned()
}

/// Collect every link in `texts`, in first-seen order, deduplicated by
/// normalized URL. Markdown links with an empty target or an in-page
/// `#anchor` target are skipped; bare URLs already captured as a
/// markdown link's target are skipped by the same normalization.
pub fn extract<'a>(texts: impl IntoIterator<Item = &'a str>) -> Vec<LinkEntry> {
    let mut entries = Vec::new();
    let mut seen = HashSet::new();

    for text in texts {
        let residual = MD_LINK.replace_all(text, |caps: &Captures| {
            let label = caps[1].trim();
            let url = caps[2].trim();
            if !url.is_empty() && !url.starts_with('#') {
                push_unique(&mut entries, &mut seen, label.to_string(), url.to_string());
            }
            // Bare-URL scanning runs on the residual text, with the link
            // reduced to its label so the target is not double-counted.
            caps[1].to_string()
        });
        for found in BARE_URL.find_iter(&residual) {
            let url = found.as_str().to_string();
            let label = bare_label(&url);
            push_unique(&mut entries, &mut seen, label, url);
        }
    }

    entries
}

/// Case-folded URL with scheme, leading `www.` and trailing slashes
/// stripped; equality on this key drives deduplication.
pub fn normalize_url(url: &str) -> String {
    let lower = url.to_ascii_lowercase();
    let stripped = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .unwrap_or(&lower);
    let stripped = stripped.strip_prefix("www.").unwrap_or(stripped);
    stripped.trim_end_matches('/').to_string()
}

fn push_unique(
    entries: &mut Vec<LinkEntry>,
    seen: &mut HashSet<String>,
    label: String,
    url: String,
) {
    if seen.insert(normalize_url(&url)) {
        entries.push(LinkEntry { label, url });
    }
}

fn bare_label(url: &str) -> String {
    hostname(url).map_or_else(
        || {
            debug!(url, "no hostname, falling back to raw url label");
            url.to_string()
        },
        |host| host.strip_prefix("www.").unwrap_or(host).to_string(),
    )
}

fn hostname(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let authority = rest.split(['/', '?', '#']).next()?;
    let host = authority.rsplit('@').next()?;
    let host = host.split(':').next()?;
    if host.is_empty() { None } else { Some(host) }
}
