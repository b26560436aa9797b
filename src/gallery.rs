//! Avatar directory management.
//!
//! Generated avatars live in `<identity>/avatar/` as
//! `<YYYYmmdd-HHMMSS>-<style>-<hash>.png`, alongside a `prompts.json` record
//! of how each one was made and an `index.html` gallery.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use walkdir::WalkDir;

use crate::assets::write_png;
use crate::error::{AvatarError, Result};
use crate::types::Style;

/// Directory under the identity root that holds avatars.
pub const AVATAR_DIR: &str = "avatar";

/// Prompt record file name.
pub const PROMPTS_FILE: &str = "prompts.json";

/// Gallery page file name.
pub const INDEX_FILE: &str = "index.html";

const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// How an avatar was generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRecord {
    pub prompt: String,
    pub variant: String,
    pub generated: String,
    pub model: String,
}

/// An avatar file found in the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarEntry {
    pub file_name: String,
    pub style: String,
}

/// First 8 hex digits of the SHA-256 of the prompt.
pub fn prompt_hash(prompt: &str) -> String {
    let digest = Sha256::digest(prompt.as_bytes());
    hex::encode(&digest[..4])
}

/// File name for a new avatar.
pub fn avatar_file_name(generated: NaiveDateTime, style: Style, prompt: &str) -> String {
    format!(
        "{}-{}-{}.png",
        generated.format(TIMESTAMP_FORMAT),
        style,
        prompt_hash(prompt)
    )
}

/// Style segment of an avatar file name, `"unknown"` if it doesn't follow
/// the `<date>-<time>-<style>-<hash>` pattern.
pub fn style_of(file_name: &str) -> String {
    let stem = file_name.strip_suffix(".png").unwrap_or(file_name);
    let parts: Vec<&str> = stem.split('-').collect();
    match parts.as_slice() {
        [_, _, style, .., _] if !style.is_empty() => style.to_string(),
        _ => "unknown".to_string(),
    }
}

/// The avatar directory of one identity.
#[derive(Debug, Clone)]
pub struct AvatarDir {
    dir: PathBuf,
}

impl AvatarDir {
    pub fn new(identity: &Path) -> Self {
        Self {
            dir: identity.join(AVATAR_DIR),
        }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    pub fn exists(&self) -> bool {
        self.dir.is_dir()
    }

    /// Decode `bytes`, save them as a PNG and refresh prompts.json and index.html.
    pub fn save(
        &self,
        bytes: &[u8],
        prompt: &str,
        style: Style,
        model: &str,
        generated: NaiveDateTime,
    ) -> Result<PathBuf> {
        let file_name = avatar_file_name(generated, style, prompt);
        let path = self.dir.join(&file_name);

        let img = image::load_from_memory(bytes).map_err(|e| AvatarError::Image {
            path: path.clone(),
            message: e.to_string(),
        })?;
        write_png(&img.to_rgba8(), &path)?;

        let mut records = self.load_prompts()?;
        records.insert(
            file_name,
            PromptRecord {
                prompt: prompt.to_string(),
                variant: style.to_string(),
                generated: generated.format(TIMESTAMP_FORMAT).to_string(),
                model: format!("openai/{}", model),
            },
        );
        self.write_prompts(&records)?;
        self.write_index()?;

        Ok(path)
    }

    /// All avatar PNGs, sorted by name.
    pub fn list(&self) -> Result<Vec<AvatarEntry>> {
        if !self.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| AvatarError::Io {
                path: self.dir.clone(),
                message: e.to_string(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy().to_string();
            if !file_name.ends_with(".png") {
                continue;
            }
            entries.push(AvatarEntry {
                style: style_of(&file_name),
                file_name,
            });
        }

        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(entries)
    }

    pub fn load_prompts(&self) -> Result<BTreeMap<String, PromptRecord>> {
        let path = self.dir.join(PROMPTS_FILE);
        if !path.is_file() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&path).map_err(|e| AvatarError::Io {
            path: path.clone(),
            message: format!("Failed to read prompts: {}", e),
        })?;
        serde_json::from_str(&content).map_err(|e| AvatarError::Parse {
            message: format!("Invalid {}: {}", path.display(), e),
            help: None,
        })
    }

    fn write_prompts(&self, records: &BTreeMap<String, PromptRecord>) -> Result<()> {
        let path = self.dir.join(PROMPTS_FILE);
        let json = serde_json::to_string_pretty(records).map_err(|e| AvatarError::Parse {
            message: format!("Failed to serialize prompts: {}", e),
            help: None,
        })?;
        fs::write(&path, json).map_err(|e| AvatarError::Io {
            path,
            message: format!("Failed to write prompts: {}", e),
        })
    }

    /// Regenerate index.html from the PNGs currently in the directory.
    pub fn write_index(&self) -> Result<()> {
        let html = render_index(&self.list()?);
        let path = self.dir.join(INDEX_FILE);
        fs::write(&path, html).map_err(|e| AvatarError::Io {
            path,
            message: format!("Failed to write gallery: {}", e),
        })
    }
}

/// Render the gallery page.
pub fn render_index(entries: &[AvatarEntry]) -> String {
    let mut html = String::from(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Avatar Gallery</title>
    <style>
        body { font-family: system-ui, sans-serif; padding: 2rem; background: #f5f5f5; }
        h1 { color: #333; }
        .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 1rem; }
        .card { background: white; padding: 1rem; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        img { width: 100%; height: auto; border-radius: 4px; }
        .meta { margin-top: 0.5rem; font-size: 0.8rem; color: #666; }
    </style>
</head>
<body>
    <h1>Avatar Gallery</h1>
    <div class="grid">
"#,
    );

    for entry in entries {
        let name = escape_html(&entry.file_name);
        html.push_str(&format!(
            "        <div class=\"card\">\n            <img src=\"{name}\" alt=\"{name}\">\n            <div class=\"meta\">{}</div>\n        </div>\n",
            escape_html(&entry.style)
        ));
    }

    html.push_str("    </div>\n</body>\n</html>\n");
    html
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use image::{Rgba, RgbaImage};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn png_bytes() -> Vec<u8> {
        let img = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_prompt_hash() {
        // sha256("abc") = ba7816bf...
        assert_eq!(prompt_hash("abc"), "ba7816bf");
    }

    #[test]
    fn test_avatar_file_name() {
        let name = avatar_file_name(at(14, 5, 9), Style::Friendly, "abc");
        assert_eq!(name, "20240309-140509-friendly-ba7816bf.png");
    }

    #[test]
    fn test_style_of() {
        assert_eq!(style_of("20240309-140509-friendly-ba7816bf.png"), "friendly");
        assert_eq!(style_of("portrait.png"), "unknown");
        assert_eq!(style_of("a-b.png"), "unknown");
    }

    #[test]
    fn test_save_writes_png_prompts_and_index() {
        let dir = tempdir().unwrap();
        let avatars = AvatarDir::new(dir.path());

        let path = avatars
            .save(&png_bytes(), "abc", Style::Playful, "dall-e-3", at(1, 2, 3))
            .unwrap();

        assert_eq!(path, dir.path().join("avatar/20240309-010203-playful-ba7816bf.png"));
        assert!(path.exists());

        let records = avatars.load_prompts().unwrap();
        assert_eq!(
            records.get("20240309-010203-playful-ba7816bf.png"),
            Some(&PromptRecord {
                prompt: "abc".to_string(),
                variant: "playful".to_string(),
                generated: "20240309-010203".to_string(),
                model: "openai/dall-e-3".to_string(),
            })
        );

        let index = fs::read_to_string(avatars.path().join(INDEX_FILE)).unwrap();
        assert!(index.contains("<img src=\"20240309-010203-playful-ba7816bf.png\""));
        assert!(index.contains("<div class=\"meta\">playful</div>"));
    }

    #[test]
    fn test_save_keeps_existing_records() {
        let dir = tempdir().unwrap();
        let avatars = AvatarDir::new(dir.path());

        avatars
            .save(&png_bytes(), "one", Style::Minimal, "dall-e-3", at(1, 0, 0))
            .unwrap();
        avatars
            .save(&png_bytes(), "two", Style::Friendly, "gpt-image-1", at(2, 0, 0))
            .unwrap();

        assert_eq!(avatars.load_prompts().unwrap().len(), 2);
        let styles: Vec<String> = avatars.list().unwrap().into_iter().map(|e| e.style).collect();
        assert_eq!(styles, vec!["minimal", "friendly"]);
    }

    #[test]
    fn test_save_rejects_invalid_image() {
        let dir = tempdir().unwrap();
        let avatars = AvatarDir::new(dir.path());
        let err = avatars
            .save(b"garbage", "p", Style::Minimal, "dall-e-3", at(0, 0, 0))
            .unwrap_err();
        assert!(matches!(err, AvatarError::Image { .. }));
        assert!(avatars.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_missing_dir() {
        let dir = tempdir().unwrap();
        assert!(AvatarDir::new(dir.path()).list().unwrap().is_empty());
    }

    #[test]
    fn test_render_index_escapes() {
        let html = render_index(&[AvatarEntry {
            file_name: "a&b.png".to_string(),
            style: "<x>".to_string(),
        }]);
        assert!(html.contains("src=\"a&amp;b.png\""));
        assert!(html.contains("&lt;x&gt;"));
        assert!(html.ends_with("</html>\n"));
    }
}
