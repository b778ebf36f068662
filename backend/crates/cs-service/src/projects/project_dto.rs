use cs_core::{Project, ProjectType};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Project DTO for JSON serialization
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub project_type: ProjectType,
    pub technologies: Vec<String>,
    pub owner_id: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id.to_string(),
            title: p.title,
            description: p.description,
            project_type: p.project_type,
            technologies: p.technologies,
            owner_id: p.owner_id.to_string(),
            is_active: p.is_active,
            created_at: p.created_at,
        }
    }
}
