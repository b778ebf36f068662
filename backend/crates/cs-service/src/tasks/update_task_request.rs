use cs_core::TaskStatus;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UpdateTaskRequest {
    pub status: TaskStatus,
}
