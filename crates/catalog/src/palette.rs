use crate::error::CatalogError;
use folio_types::{Color, ColorTokens};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named color scheme. Any token left out takes the neutral default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: Option<Color>,
    pub secondary: Option<Color>,
    pub accent: Option<Color>,
    pub background: Option<Color>,
    pub text: Option<Color>,
    pub border: Option<Color>,
}

impl ColorScheme {
    pub fn tokens(&self) -> ColorTokens {
        let neutral = ColorTokens::NEUTRAL;
        ColorTokens {
            primary: self.primary.unwrap_or(neutral.primary),
            secondary: self.secondary.unwrap_or(neutral.secondary),
            accent: self.accent.unwrap_or(neutral.accent),
            background: self.background.unwrap_or(neutral.background),
            text: self.text.unwrap_or(neutral.text),
            border: self.border.unwrap_or(neutral.border),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ColorSchemeCatalog {
    schemes: IndexMap<String, ColorScheme>,
}

impl ColorSchemeCatalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let schemes = serde_json::from_str(json).map_err(|source| CatalogError::Parse {
            catalog: "color scheme",
            source,
        })?;
        Ok(Self { schemes })
    }

    pub fn get(&self, name: &str) -> Option<&ColorScheme> {
        self.schemes.get(name)
    }

    /// The first scheme in catalog order, with its name.
    pub fn first(&self) -> Option<(&str, &ColorScheme)> {
        self.schemes.first().map(|(name, scheme)| (name.as_str(), scheme))
    }
}
