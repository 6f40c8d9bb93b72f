//! Pokémon themes for terminal emulators.
//!
//! Turns a host configuration naming a theme (`pokemon = "lapras"`, a type
//! such as `"fire"`, or `"random"`) into color-scheme overrides and a CSS
//! block the host applies to its window chrome.
//!
//! # Pipeline
//!
//! - **options**: read `pokemon`, `poketab`, `unibody` from the raw config
//! - **selector**: resolve the token against the [`ThemeDataset`]
//! - **assets**: background image and tab icon paths for the theme
//! - **style**: derived colors, ANSI table and stylesheet
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use poke_theme::{Decorator, PluginConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load the dataset once at startup
//!     let decorator = Decorator::new(PluginConfig::from_env()?)?;
//!
//!     let host = serde_json::json!({ "pokemon": ["lapras", "fire"], "poketab": "true" });
//!     let decorated = decorator.decorate(&host)?;
//!     println!("{}", decorated["css"]);
//!     Ok(())
//! }
//! ```

pub mod assets;
pub mod color;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod decorate;
pub mod error;
pub mod options;
pub mod selector;
pub mod style;

pub use assets::{AssetPaths, AssetRoots, Platform, locate_assets, normalize_for_css};
pub use color::Color;
pub use config::PluginConfig;
pub use dataset::{Category, Palette, ThemeDataset};
pub use decorate::{Decorator, decorate, decorate_config};
pub use error::{ColorError, DataLoadError, PokeThemeError, Result};
pub use options::{Options, resolve_options};
pub use selector::{ResolvedTheme, resolve_theme};
pub use style::{AnsiColors, DerivedColors, StyleOutput, TerminalColors, derive_colors, synthesize};
