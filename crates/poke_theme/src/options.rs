//! User options read from the host configuration.
//!
//! Nothing here fails: malformed or missing fields fall back to defaults.

use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::Value;

use crate::constants::FALLBACK_THEME;

/// Canonical plugin options for one decoration pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Theme name, category name, or `random`.
    pub pokemon: String,
    /// Overlay an animated icon on the active tab.
    pub poketab: bool,
    /// Use the palette's single background color for chrome.
    pub unibody: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            pokemon: FALLBACK_THEME.to_string(),
            poketab: false,
            unibody: true,
        }
    }
}

/// Read `pokemon`, `poketab` and `unibody` from `raw`.
///
/// When `pokemon` is a list, one entry is drawn here, once, and the result is
/// fixed for the rest of the pass.
pub fn resolve_options<R: Rng + ?Sized>(raw: &Value, rng: &mut R) -> Options {
    Options {
        pokemon: pokemon_token(raw.get("pokemon"), rng),
        poketab: flag(raw.get("poketab"), "false") == "true",
        unibody: flag(raw.get("unibody"), "true") != "false",
    }
}

fn pokemon_token<R: Rng + ?Sized>(value: Option<&Value>, rng: &mut R) -> String {
    let picked = match value {
        Some(Value::Array(items)) => {
            let names: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            names.choose(rng).copied()
        }
        Some(Value::String(name)) => Some(name.as_str()),
        _ => None,
    };
    match picked {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => FALLBACK_THEME.to_string(),
    }
}

/// String value of a boolean-like field; booleans count as their text form.
fn flag<'a>(value: Option<&'a Value>, default: &'a str) -> &'a str {
    match value {
        Some(Value::String(text)) if !text.is_empty() => text.as_str(),
        Some(Value::Bool(true)) => "true",
        Some(Value::Bool(false)) => "false",
        _ => default,
    }
}
