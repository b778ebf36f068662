//! Project entity - a learning project owned by a user, container for tasks.

use crate::ProjectType;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub project_type: ProjectType,
    /// Ordered as the user entered them
    pub technologies: Vec<String>,
    pub owner_id: Uuid,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Create a new active project with a fresh id
    pub fn new(
        title: String,
        description: String,
        project_type: ProjectType,
        technologies: Vec<String>,
        owner_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            project_type,
            technologies,
            owner_id,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Comma-joined technology list, as used in prompts and fallback text
    pub fn technologies_label(&self) -> String {
        self.technologies.join(", ")
    }
}
