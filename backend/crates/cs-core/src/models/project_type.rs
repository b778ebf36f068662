use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Kind of project a user wants to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectType {
    Backend,
    Frontend,
    Fullstack,
}

impl ProjectType {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backend => "BACKEND",
            Self::Frontend => "FRONTEND",
            Self::Fullstack => "FULLSTACK",
        }
    }

    /// Lower-case name used in prose (prompts, fallback titles)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::Frontend => "frontend",
            Self::Fullstack => "fullstack",
        }
    }
}

impl FromStr for ProjectType {
    type Err = CoreError;

    /// Accepts both the stored form (`BACKEND`) and the prose form (`backend`).
    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "BACKEND" => Ok(Self::Backend),
            "FRONTEND" => Ok(Self::Frontend),
            "FULLSTACK" => Ok(Self::Fullstack),
            _ => Err(CoreError::InvalidProjectType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
