use crate::{ProjectDto, TaskDto};

use serde::Serialize;

/// A project together with its tasks, oldest first
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithTasksDto {
    #[serde(flatten)]
    pub project: ProjectDto,
    pub tasks: Vec<TaskDto>,
}
