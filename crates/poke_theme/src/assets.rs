//! Media paths for a resolved theme.
//!
//! Paths are built by joining a root directory with the theme name and then
//! appending the extension, with no existence check. Theme names always come
//! from dataset keys, so no escaping is applied.

use std::path::{Path, PathBuf};

use crate::constants::{GIF_EXT, IMAGE_EXT};

/// Platform whose path convention must be rewritten before embedding in CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

/// Directories holding background images and tab icons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRoots {
    pub backgrounds: PathBuf,
    pub gifs: PathBuf,
}

impl AssetRoots {
    pub fn new(backgrounds: impl Into<PathBuf>, gifs: impl Into<PathBuf>) -> Self {
        Self {
            backgrounds: backgrounds.into(),
            gifs: gifs.into(),
        }
    }

    /// `<base>/backgrounds` and `<base>/pokecursors`.
    pub fn under(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self::new(base.join("backgrounds"), base.join("pokecursors"))
    }
}

/// Background image and tab icon for one theme, ready for `url(...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub image: String,
    pub gif: String,
}

pub fn locate_assets(theme_name: &str, roots: &AssetRoots, platform: Platform) -> AssetPaths {
    AssetPaths {
        image: media_path(&roots.backgrounds, theme_name, IMAGE_EXT, platform),
        gif: media_path(&roots.gifs, theme_name, GIF_EXT, platform),
    }
}

fn media_path(root: &Path, theme_name: &str, ext: &str, platform: Platform) -> String {
    let mut path = root.join(theme_name).into_os_string();
    path.push(ext);
    normalize_for_css(&PathBuf::from(path), platform)
}

/// Path text for CSS: Windows separators become `/`, others pass through.
pub fn normalize_for_css(path: &Path, platform: Platform) -> String {
    let text = path.to_string_lossy();
    match platform {
        Platform::Windows => text.replace('\\', "/"),
        Platform::Unix => text.into_owned(),
    }
}
