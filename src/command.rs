//! The `/table` slash-command front end.
//!
//! Two-token grammar: `style unicode|ascii|cards|default` and
//! `links on|off`. Anything else replies with usage and changes nothing;
//! an empty invocation reports the current preferences without mutation.

use crate::config::{Settings, TableStyle};
use crate::prefs::{PrefStore, StoreError, UserPreference};

const USAGE: &str = "Usage: `/table style unicode|ascii|cards|default` or `/table links on|off`";

/// Handle one invocation's argument string and return the reply text.
pub fn handle(
    args: &str,
    user_id: &str,
    settings: &Settings,
    store: &dyn PrefStore,
) -> Result<String, StoreError> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    match tokens.as_slice() {
        [] => report(user_id, settings, store),
        ["style", value] => set_style(value, user_id, settings, store),
        ["links", value] => set_links(value, user_id, settings, store),
        _ => Ok(USAGE.to_string()),
    }
}

fn report(
    user_id: &str,
    settings: &Settings,
    store: &dyn PrefStore,
) -> Result<String, StoreError> {
    let pref = store.get(user_id)?;
    let style = pref.as_ref().and_then(|p| p.style).map_or_else(
        || format!("default ({})", settings.table_style.as_str()),
        |style| style.as_str().to_string(),
    );
    let links = if pref
        .as_ref()
        .map_or(settings.show_links_below, |p| p.show_links_below)
    {
        "shown"
    } else {
        "hidden"
    };
    Ok(format!(
        "Table style: {style}. Links below tables: {links}."
    ))
}

fn set_style(
    value: &str,
    user_id: &str,
    settings: &Settings,
    store: &dyn PrefStore,
) -> Result<String, StoreError> {
    let style = match value {
        "default" => None,
        other => match TableStyle::parse(other) {
            Some(style) => Some(style),
            None => return Ok(USAGE.to_string()),
        },
    };

    let mut pref = current_or_seed(user_id, settings, store)?;
    pref.style = style;
    store.put(user_id, &pref)?;

    Ok(style.map_or_else(
        || {
            format!(
                "Table style reset to the server default ({}).",
                settings.table_style.as_str()
            )
        },
        |style| format!("Table style set to {}.", style.as_str()),
    ))
}

fn set_links(
    value: &str,
    user_id: &str,
    settings: &Settings,
    store: &dyn PrefStore,
) -> Result<String, StoreError> {
    let show = match value {
        "on" => true,
        "off" => false,
        _ => return Ok(USAGE.to_string()),
    };

    let mut pref = current_or_seed(user_id, settings, store)?;
    pref.show_links_below = show;
    store.put(user_id, &pref)?;

    Ok(if show {
        "Links found in tables will be listed below them.".to_string()
    } else {
        "Links found in tables will no longer be listed.".to_string()
    })
}

/// The user's record, or a fresh one seeded from the admin default.
fn current_or_seed(
    user_id: &str,
    settings: &Settings,
    store: &dyn PrefStore,
) -> Result<UserPreference, StoreError> {
    Ok(store.get(user_id)?.unwrap_or(UserPreference {
        show_links_below: settings.default_show_links_below,
        style: None,
    }))
}
