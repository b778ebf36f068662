use crate::{CoreError, CoreResult, ProjectType};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Input for drafting a project proposal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalRequest {
    pub project_type: ProjectType,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
}

impl ProposalRequest {
    pub fn new(project_type: ProjectType, technologies: Vec<String>) -> Self {
        Self {
            project_type,
            technologies,
            additional_info: None,
        }
    }

    pub fn with_additional_info(mut self, info: impl Into<String>) -> Self {
        self.additional_info = Some(info.into());
        self
    }

    /// Comma-joined technology list
    pub fn technologies_label(&self) -> String {
        self.technologies.join(", ")
    }

    /// At least one non-blank technology is required.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.technologies.iter().all(|t| t.trim().is_empty()) {
            return Err(CoreError::Validation {
                message: "at least one technology is required".to_string(),
                field: Some("technologies".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}
