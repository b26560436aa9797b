//! Badge asset store.
//!
//! A directory of pre-rendered badge PNGs keyed by name:
//! `bot-badge-<colour>.png` for bot badges (the red one doubles as the
//! colorizer template) and `premium-badge.png` for the premium overlay.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::{AvatarError, Result};

/// Colour whose badge acts as the template for deriving the others.
pub const TEMPLATE_COLOUR: &str = "red";

/// File name of the premium badge.
pub const PREMIUM_BADGE: &str = "premium-badge.png";

/// Load any image file as RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| AvatarError::Image {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(img.to_rgba8())
}

/// Write an RGBA image as PNG, creating parent directories.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| AvatarError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }

    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| AvatarError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })
}

/// File-backed mapping from badge name to PNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn badge_path(&self, colour: &str) -> PathBuf {
        self.root
            .join(format!("bot-badge-{}.png", colour.to_ascii_lowercase()))
    }

    pub fn template_path(&self) -> PathBuf {
        self.badge_path(TEMPLATE_COLOUR)
    }

    pub fn premium_path(&self) -> PathBuf {
        self.root.join(PREMIUM_BADGE)
    }

    /// Load a bot badge, `None` if the file does not exist.
    pub fn load_badge(&self, colour: &str) -> Result<Option<RgbaImage>> {
        load_optional(&self.badge_path(colour))
    }

    pub fn load_template(&self) -> Result<Option<RgbaImage>> {
        load_optional(&self.template_path())
    }

    pub fn load_premium(&self) -> Result<Option<RgbaImage>> {
        load_optional(&self.premium_path())
    }

    /// Persist a bot badge under `colour`, returning its path.
    pub fn save_badge(&self, colour: &str, img: &RgbaImage) -> Result<PathBuf> {
        let path = self.badge_path(colour);
        write_png(img, &path)?;
        Ok(path)
    }
}

fn load_optional(path: &Path) -> Result<Option<RgbaImage>> {
    if !path.is_file() {
        return Ok(None);
    }
    load_rgba(path).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::tempdir;

    #[test]
    fn test_paths() {
        let store = AssetStore::new("assets");
        assert_eq!(store.badge_path("Black"), PathBuf::from("assets/bot-badge-black.png"));
        assert_eq!(store.template_path(), PathBuf::from("assets/bot-badge-red.png"));
        assert_eq!(store.premium_path(), PathBuf::from("assets/premium-badge.png"));
    }

    #[test]
    fn test_missing_badge_is_none() {
        let dir = tempdir().unwrap();
        let store = AssetStore::new(dir.path());
        assert!(store.load_badge("white").unwrap().is_none());
        assert!(store.load_premium().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_badge() {
        let dir = tempdir().unwrap();
        let store = AssetStore::new(dir.path().join("nested"));
        let img = RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 200]));

        let path = store.save_badge("black", &img).unwrap();
        assert!(path.exists());

        let loaded = store.load_badge("black").unwrap().unwrap();
        assert_eq!(loaded, img);
    }

    #[test]
    fn test_corrupt_badge_is_error() {
        let dir = tempdir().unwrap();
        let store = AssetStore::new(dir.path());
        fs::write(store.badge_path("red"), b"not a png").unwrap();

        let err = store.load_template().unwrap_err();
        assert!(matches!(err, AvatarError::Image { .. }));
    }
}
