//! API key lookup for the image generation service.
//!
//! Checked in order: the `OPENAI_API_KEY` environment variable, then
//! `~/.claude/settings.json`, then `~/.openclaw/openclaw.json`. Unreadable or
//! malformed config files are skipped.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::error::{AvatarError, Result};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Top-level JSON keys that may hold the key, in priority order.
const KEY_LOCATIONS: [&str; 4] = ["openai_api_key", "OPENAI_API_KEY", "api_keys", "keys"];

/// Config files searched for a key, in priority order.
pub fn default_config_paths() -> Vec<PathBuf> {
    let Some(home) = dirs::home_dir() else {
        return Vec::new();
    };
    vec![
        home.join(".claude").join("settings.json"),
        home.join(".openclaw").join("openclaw.json"),
    ]
}

/// Find the API key from the environment or the default config files.
pub fn find_api_key() -> Result<String> {
    resolve_api_key(std::env::var(API_KEY_ENV).ok(), &default_config_paths())
}

/// Resolve a key from an optional env value and a list of JSON config files.
pub fn resolve_api_key(env_value: Option<String>, paths: &[PathBuf]) -> Result<String> {
    if let Some(key) = env_value.filter(|k| !k.trim().is_empty()) {
        return Ok(key);
    }

    paths
        .iter()
        .filter_map(|path| fs::read_to_string(path).ok())
        .filter_map(|content| serde_json::from_str::<Value>(&content).ok())
        .find_map(|config| key_from_config(&config))
        .ok_or(AvatarError::MissingCredentials)
}

/// Extract a key from a parsed config document.
///
/// A location may hold the key directly as a string, or an object with an
/// `openai` or `default` entry.
pub fn key_from_config(config: &Value) -> Option<String> {
    KEY_LOCATIONS.iter().find_map(|location| {
        let key = match config.get(location)? {
            Value::String(s) => Some(s.as_str()),
            Value::Object(map) => ["openai", "default"]
                .iter()
                .find_map(|name| map.get(*name).and_then(Value::as_str).filter(|s| !s.is_empty())),
            _ => None,
        }?;
        (!key.is_empty()).then(|| key.to_string())
    })
}
