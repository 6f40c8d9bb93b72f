//! Error types for theme decoration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a decoration call.
#[derive(Error, Debug)]
pub enum PokeThemeError {
    /// The theme dataset could not be produced
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),

    /// Configuration error (invalid values)
    #[error("config error: {0}")]
    Config(String),

    /// Color scheme could not be converted into host config values
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// A dataset file is missing, unreadable, or malformed.
///
/// A corrupt install cannot produce a theme, so these are never recovered.
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("failed to read theme data {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed theme data in {file}: {message}")]
    Parse { file: String, message: String },

    #[error("theme data has no `pokemon.pikachu` fallback entry")]
    MissingFallback,
}

/// A palette color that is neither hex nor a CSS color name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color `{0}`")]
pub struct ColorError(pub String);

/// Result type for theme decoration.
pub type Result<T> = std::result::Result<T, PokeThemeError>;
