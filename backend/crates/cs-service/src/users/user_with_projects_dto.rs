use crate::{ProjectDto, UserDto};

use serde::Serialize;

/// A user together with the projects they own
#[derive(Debug, Clone, Serialize)]
pub struct UserWithProjectsDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub projects: Vec<ProjectDto>,
}
