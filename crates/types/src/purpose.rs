use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the reader of a report is trying to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    #[default]
    Executive,
    Analyst,
    Dashboard,
    Storytelling,
    Comparison,
}

impl Purpose {
    pub const ALL: [Purpose; 5] = [
        Purpose::Executive,
        Purpose::Analyst,
        Purpose::Dashboard,
        Purpose::Storytelling,
        Purpose::Comparison,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Purpose::Executive => "executive",
            Purpose::Analyst => "analyst",
            Purpose::Dashboard => "dashboard",
            Purpose::Storytelling => "storytelling",
            Purpose::Comparison => "comparison",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPurpose(pub String);

impl fmt::Display for UnknownPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown report purpose '{}'", self.0)
    }
}

impl std::error::Error for UnknownPurpose {}

impl FromStr for Purpose {
    type Err = UnknownPurpose;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Purpose::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| UnknownPurpose(s.to_string()))
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
