//! Builtin prompts for each avatar style.

use std::collections::BTreeMap;

use crate::types::Style;

/// Prompt text per style, owned by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompts {
    entries: BTreeMap<Style, String>,
}

impl Default for Prompts {
    fn default() -> Self {
        let entries = Style::ALL
            .iter()
            .map(|&style| (style, builtin(style).to_string()))
            .collect();
        Self { entries }
    }
}

impl Prompts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prompt for `style`, falling back to the minimal prompt.
    pub fn get(&self, style: Style) -> &str {
        self.entries
            .get(&style)
            .or_else(|| self.entries.get(&Style::Minimal))
            .map_or_else(|| builtin(Style::Minimal), String::as_str)
    }

    /// Replace the prompt for a style.
    pub fn set(&mut self, style: Style, prompt: impl Into<String>) {
        self.entries.insert(style, prompt.into());
    }
}

fn builtin(style: Style) -> &'static str {
    match style {
        Style::Minimal => "A minimalist elegant avatar for an AI assistant, simple icon style, soft colors, white or light gray background, flat design, professional",
        Style::Friendly => "A friendly warm AI bot avatar, rounded features, welcoming expression, soft pastel colors, clean background, approachable design",
        Style::Professional => "A professional AI assistant avatar, sharp clean lines, business-appropriate, navy or dark blue accents, white background, corporate style",
        Style::Playful => "A playful colorful AI bot avatar, fun details, vibrant but not overwhelming colors, light creative background, whimsical but not childish",
    }
}
