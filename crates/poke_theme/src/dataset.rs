//! Theme dataset: category → theme name → palette.
//!
//! Loaded from three YAML files (`types.yml`, `pokemon.yml`, `trainers.yml`)
//! whose top-level keys are merged into one mapping. Names are stored trimmed
//! and lower-cased so every lookup is a plain map access on a normalized key.

use std::collections::BTreeMap;
use std::path::Path;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::constants::{DATA_FILES, FALLBACK_THEME, POKEMON_CATEGORY};
use crate::error::DataLoadError;

/// The four colors defining a theme's appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
    /// Single background color used in unibody mode.
    pub unibody: Color,
}

/// Themes of one category, ordered by name.
pub type Category = BTreeMap<String, Palette>;

type DataFile = BTreeMap<String, BTreeMap<String, Palette>>;

static BUNDLED: OnceCell<ThemeDataset> = OnceCell::new();

fn bundled_text(file: &str) -> Option<&'static str> {
    match file {
        "types.yml" => Some(include_str!("../data/types.yml")),
        "pokemon.yml" => Some(include_str!("../data/pokemon.yml")),
        "trainers.yml" => Some(include_str!("../data/trainers.yml")),
        _ => None,
    }
}

/// Immutable mapping of category name to its themes.
///
/// Always contains the `pokemon` category with a `pikachu` entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeDataset {
    categories: BTreeMap<String, Category>,
}

impl ThemeDataset {
    /// Read and merge the data files in `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let dir = dir.as_ref();
        let mut sources = Vec::with_capacity(DATA_FILES.len());
        for file in DATA_FILES {
            let path = dir.join(file);
            let text = std::fs::read_to_string(&path)
                .map_err(|source| DataLoadError::Read { path, source })?;
            sources.push((file, text));
        }
        let borrowed: Vec<(&str, &str)> = sources
            .iter()
            .map(|(file, text)| (*file, text.as_str()))
            .collect();
        Self::from_sources(&borrowed)
    }

    /// The data files compiled into this crate, parsed once per process.
    pub fn bundled() -> Result<&'static ThemeDataset, DataLoadError> {
        BUNDLED.get_or_try_init(|| {
            let sources: Vec<(&str, &str)> = DATA_FILES
                .iter()
                .filter_map(|file| bundled_text(file).map(|text| (*file, text)))
                .collect();
            Self::from_sources(&sources)
        })
    }

    /// Parse `(file name, yaml text)` pairs and merge them in order.
    /// A category defined by more than one file is taken from the last one.
    pub fn from_sources(sources: &[(&str, &str)]) -> Result<Self, DataLoadError> {
        let mut categories: BTreeMap<String, Category> = BTreeMap::new();

        for (file, text) in sources {
            let parsed: DataFile =
                serde_yaml::from_str(text).map_err(|e| DataLoadError::Parse {
                    file: (*file).to_string(),
                    message: e.to_string(),
                })?;

            for (category, themes) in parsed {
                let category = normalize(&category);
                let mut normalized = Category::new();
                for (name, palette) in themes {
                    let key = normalize(&name);
                    if normalized.insert(key.clone(), palette).is_some() {
                        tracing::warn!(category = %category, theme = %key, file = %file, "theme name repeated after normalization, keeping later entry");
                    }
                }
                if categories.insert(category.clone(), normalized).is_some() {
                    tracing::warn!(category = %category, file = %file, "category redefined, keeping later definition");
                }
            }
        }

        let has_fallback = categories
            .get(POKEMON_CATEGORY)
            .is_some_and(|pokemon| pokemon.contains_key(FALLBACK_THEME));
        if !has_fallback {
            return Err(DataLoadError::MissingFallback);
        }

        tracing::debug!(categories = categories.len(), "theme dataset loaded");
        Ok(Self { categories })
    }

    /// Themes in `name` (case-insensitive, trimmed).
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(&normalize(name))
    }

    pub fn contains_category(&self, name: &str) -> bool {
        self.category(name).is_some()
    }

    /// The category of themes addressable by exact name.
    pub fn pokemon(&self) -> &Category {
        // Present by construction: `from_sources` rejects data without it.
        &self.categories[POKEMON_CATEGORY]
    }

    /// The `pikachu` palette.
    pub fn fallback(&self) -> &Palette {
        &self.pokemon()[FALLBACK_THEME]
    }

    /// Category names with their themes, ordered by name.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.categories.iter().map(|(name, themes)| (name.as_str(), themes))
    }
}

/// Canonical form for category and theme names.
pub(crate) fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
