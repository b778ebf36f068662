use cs_core::{Task, TaskStatus};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Task DTO for JSON serialization
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub project_id: String,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<Task> for TaskDto {
    fn from(t: Task) -> Self {
        Self {
            id: t.id.to_string(),
            title: t.title,
            description: t.description,
            status: t.status,
            project_id: t.project_id.to_string(),
            created_at: t.created_at,
            completed_at: t.completed_at,
        }
    }
}
