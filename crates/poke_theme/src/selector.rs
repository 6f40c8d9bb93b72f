//! Theme selection: a user token to a concrete `(name, palette)` pair.

use rand::Rng;
use rand::seq::IteratorRandom;

use crate::constants::{FALLBACK_THEME, RANDOM_TOKEN};
use crate::dataset::{Category, Palette, ThemeDataset, normalize};

/// Outcome of theme selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTheme {
    pub name: String,
    pub palette: Palette,
}

/// Resolve `token` against `dataset`. Matching is case-insensitive and
/// ignores surrounding whitespace. In order:
///
/// 1. `random`: any pokemon.
/// 2. a category name: any theme of that category.
/// 3. a pokemon name: that pokemon.
/// 4. anything else: `pikachu`.
pub fn resolve_theme<R: Rng + ?Sized>(
    token: &str,
    dataset: &ThemeDataset,
    rng: &mut R,
) -> ResolvedTheme {
    let name = normalize(token);

    if name == RANDOM_TOKEN {
        if let Some(theme) = pick(dataset.pokemon(), rng) {
            tracing::debug!(theme = %theme.name, "random pokemon theme");
            return theme;
        }
    }

    if let Some(category) = dataset.category(&name) {
        if let Some(theme) = pick(category, rng) {
            tracing::debug!(category = %name, theme = %theme.name, "theme picked from category");
            return theme;
        }
    }

    if let Some(palette) = dataset.pokemon().get(&name) {
        return ResolvedTheme {
            name,
            palette: *palette,
        };
    }

    tracing::debug!(token = %token, fallback = FALLBACK_THEME, "unknown theme token");
    ResolvedTheme {
        name: FALLBACK_THEME.to_string(),
        palette: *dataset.fallback(),
    }
}

/// Uniform pick over the category's ordered keys; `None` for an empty category.
fn pick<R: Rng + ?Sized>(category: &Category, rng: &mut R) -> Option<ResolvedTheme> {
    category
        .iter()
        .choose(rng)
        .map(|(name, palette)| ResolvedTheme {
            name: name.clone(),
            palette: *palette,
        })
}
