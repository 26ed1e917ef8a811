use crate::color::Color;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FONT: &str = "Inter";

/// The six color tokens every document exposes as CSS variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub text: Color,
    pub border: Color,
}

impl ColorTokens {
    /// The hardcoded set used when no catalog entry applies.
    pub const NEUTRAL: ColorTokens = ColorTokens {
        primary: Color::rgb(0x1E, 0x40, 0xAF),
        secondary: Color::rgb(0x3B, 0x82, 0xF6),
        accent: Color::rgb(0xF5, 0x9E, 0x0B),
        background: Color::rgb(0xF8, 0xFA, 0xFC),
        text: Color::rgb(0x1E, 0x29, 0x3B),
        border: Color::rgb(0xE2, 0xE8, 0xF0),
    };

    /// `(css variable suffix, color)` pairs in a fixed order.
    pub fn entries(&self) -> [(&'static str, Color); 6] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("accent", self.accent),
            ("background", self.background),
            ("text", self.text),
            ("border", self.border),
        ]
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typography {
    pub heading: String,
    pub body: String,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            heading: DEFAULT_FONT.to_string(),
            body: DEFAULT_FONT.to_string(),
        }
    }
}

/// The resolved visual theme of a report. Immutable once selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub colors: ColorTokens,
    pub typography: Typography,
    /// The requested writing style, carried as a label only.
    pub style_name: String,
    /// The color scheme the tokens came from, if any catalog entry matched.
    pub scheme_name: Option<String>,
}
