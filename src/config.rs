//! Admin settings and per-message render options.
//!
//! The hosting server supplies [`Settings`]; a user's stored
//! [`UserPreference`](crate::prefs::UserPreference) overrides parts of it.
//! [`resolve_options`] flattens both into the plain [`RenderOptions`] the
//! pipeline consumes, so the core never touches a store or a settings
//! provider itself.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::i18n;
use crate::prefs::UserPreference;

/// How recognized tables are re-rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    Unicode,
    Ascii,
    Cards,
}

impl TableStyle {
    /// Parse a user-supplied style name.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "unicode" => Some(Self::Unicode),
            "ascii" => Some(Self::Ascii),
            "cards" => Some(Self::Cards),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unicode => "unicode",
            Self::Ascii => "ascii",
            Self::Cards => "cards",
        }
    }
}

/// Admin-configured options from the server's settings provider.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Style applied for users without an explicit style preference.
    pub table_style: TableStyle,
    /// Whether link lists are shown for users without a preference record.
    pub show_links_below: bool,
    /// Wrap emitted link URLs in `<...>` to suppress client previews.
    pub disable_link_previews: bool,
    /// Seed value for `show_links_below` when a user's first record is
    /// created by the slash command.
    pub default_show_links_below: bool,
    /// `auto`, or a fixed language code for the card usage hint.
    pub help_text_language: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            table_style: TableStyle::Unicode,
            show_links_below: true,
            disable_link_previews: false,
            default_show_links_below: true,
            help_text_language: "auto".to_string(),
        }
    }
}

/// Fully resolved inputs for one message rewrite.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub style: TableStyle,
    pub show_links: bool,
    pub disable_link_previews: bool,
    /// Language for the card usage hint.
    pub lang: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: TableStyle::Unicode,
            show_links: true,
            disable_link_previews: false,
            lang: i18n::DEFAULT_LANG.to_string(),
        }
    }
}

/// Flatten admin settings and an optional user preference record into the
/// options for one message. An unset user style defers to the admin
/// default; a missing record defers entirely.
pub fn resolve_options(
    settings: &Settings,
    pref: Option<&UserPreference>,
    user_lang: Option<&str>,
    server_lang: Option<&str>,
) -> RenderOptions {
    let style = pref
        .and_then(|p| p.style)
        .unwrap_or(settings.table_style);
    let show_links = pref.map_or(settings.show_links_below, |p| p.show_links_below);
    RenderOptions {
        style,
        show_links,
        disable_link_previews: settings.disable_link_previews,
        lang: resolve_language(&settings.help_text_language, user_lang, server_lang),
    }
}

/// `auto` resolves to the sending user's language, else the server-wide
/// language, else the fixed default; anything else is taken as-is.
pub fn resolve_language(
    setting: &str,
    user_lang: Option<&str>,
    server_lang: Option<&str>,
) -> String {
    if setting != "auto" {
        return setting.to_string();
    }
    let resolved = user_lang
        .or(server_lang)
        .unwrap_or(i18n::DEFAULT_LANG);
    debug!(resolved, "auto help-text language");
    resolved.to_string()
}
