//! Binary yes/no flag as exchanged with the generation backend.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A yes/no answer, serialized the way the document template expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum YesNo {
    #[serde(rename = "Oui")]
    Yes,
    #[default]
    #[serde(rename = "Non")]
    No,
}

impl YesNo {
    /// Returns true for `Yes`.
    pub fn is_yes(&self) -> bool {
        matches!(self, YesNo::Yes)
    }

    /// Label written into the document.
    pub fn label(&self) -> &'static str {
        match self {
            YesNo::Yes => "Oui",
            YesNo::No => "Non",
        }
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for YesNo {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "oui" | "yes" | "true" | "1" => Ok(YesNo::Yes),
            "non" | "no" | "false" | "0" => Ok(YesNo::No),
            other => Err(ValidationError::invalid_format(
                "yes_no",
                format!("expected Oui or Non, got '{}'", other),
            )),
        }
    }
}
