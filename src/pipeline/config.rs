use serde::{Deserialize, Serialize};

pub const DEFAULT_PURPOSE: &str = "executive";
pub const DEFAULT_STYLE: &str = "witty";

/// Per-report intent parameters.
///
/// `purpose` and `style` are plain strings at this boundary; values the
/// catalogs do not know degrade to the defaults inside the stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    pub title: String,
    #[serde(default = "default_purpose")]
    pub purpose: String,
    #[serde(default = "default_style")]
    pub style: String,
}

fn default_purpose() -> String {
    DEFAULT_PURPOSE.to_string()
}

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

impl ReportOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            purpose: default_purpose(),
            style: default_style(),
        }
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }
}
