use crate::TaskStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub project_id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Set only while status is Completed
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(title: String, description: String, project_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            status: TaskStatus::Pending,
            project_id,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Move to a new status, stamping or clearing `completed_at`.
    pub fn transition_to(&mut self, status: TaskStatus, at: DateTime<Utc>) {
        self.status = status;
        self.completed_at = match status {
            TaskStatus::Completed => Some(at),
            _ => None,
        };
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}
