//! Plugin configuration: where the dataset and media live, and which path
//! convention the generated CSS must follow.

use std::path::{Path, PathBuf};

use crate::assets::{AssetRoots, Platform};
use crate::error::PokeThemeError;

/// Configuration for a [`Decorator`](crate::Decorator).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PluginConfig {
    /// Directory holding `types.yml`, `pokemon.yml` and `trainers.yml`.
    /// `None` uses the data compiled into the crate.
    pub data_dir: Option<PathBuf>,
    /// Background image and tab icon directories
    pub roots: AssetRoots,
    /// Path convention for `url(...)` references
    pub platform: Platform,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            roots: AssetRoots::under(default_assets_dir()),
            platform: Platform::current(),
        }
    }
}

impl PluginConfig {
    /// Create config from environment variables.
    ///
    /// Optional: `POKE_THEME_DATA_DIR` (default: bundled data)
    /// Optional: `POKE_THEME_ASSETS_DIR` (default: `assets/` next to this crate)
    /// Optional: `POKE_THEME_BACKGROUNDS_DIR`, `POKE_THEME_GIFS_DIR` (override one root each)
    pub fn from_env() -> Result<Self, PokeThemeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PokeThemeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let dir = |key: &str| -> Result<Option<PathBuf>, PokeThemeError> {
            match lookup(key) {
                Some(value) if value.trim().is_empty() => {
                    Err(PokeThemeError::Config(format!("{key} is set but empty")))
                }
                Some(value) => Ok(Some(PathBuf::from(value))),
                None => Ok(None),
            }
        };

        let mut config = Self::default();
        if let Some(data_dir) = dir("POKE_THEME_DATA_DIR")? {
            config = config.data_dir(data_dir);
        }
        if let Some(assets) = dir("POKE_THEME_ASSETS_DIR")? {
            config.roots = AssetRoots::under(assets);
        }
        if let Some(backgrounds) = dir("POKE_THEME_BACKGROUNDS_DIR")? {
            config = config.backgrounds_dir(backgrounds);
        }
        if let Some(gifs) = dir("POKE_THEME_GIFS_DIR")? {
            config = config.gifs_dir(gifs);
        }
        Ok(config)
    }

    /// Load the dataset from `path` instead of the bundled copy.
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(path.into());
        self
    }

    pub fn backgrounds_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.roots.backgrounds = path.into();
        self
    }

    pub fn gifs_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.roots.gifs = path.into();
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }
}

fn default_assets_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
}
