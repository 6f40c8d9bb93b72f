//! Fixed names and colors shared across the pipeline.

use crate::color::Color;

/// Theme used when a token matches nothing; must exist in the pokemon category.
pub const FALLBACK_THEME: &str = "pikachu";
/// Category holding every theme addressable by exact name.
pub const POKEMON_CATEGORY: &str = "pokemon";
/// Token that picks any pokemon.
pub const RANDOM_TOKEN: &str = "random";

/// Dataset files, in merge order.
pub const DATA_FILES: [&str; 3] = ["types.yml", "pokemon.yml", "trainers.yml"];

/// Extension of background images
pub const IMAGE_EXT: &str = ".png";
/// Extension of animated tab icons
pub const GIF_EXT: &str = ".gif";

/// Active tab text over a dark secondary: #FAFAFA
pub const TAB_TEXT_LIGHT: Color = Color::rgb(0xFA, 0xFA, 0xFA);
/// Active tab text over a light secondary: #383A42
pub const TAB_TEXT_DARK: Color = Color::rgb(0x38, 0x3A, 0x42);

/// Alpha applied to `primary` for the selection color
pub const SELECTION_ALPHA: f32 = 0.3;
/// Relative lightness reduction from active to inactive tab
pub const INACTIVE_TAB_DARKEN: f32 = 0.1;
