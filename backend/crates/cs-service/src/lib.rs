//! Application operations over users, projects, tasks and proposals.
//!
//! Each operation validates its input, talks to the repositories and returns
//! a DTO shaped like the public wire schema.

pub mod error;
pub mod page;
pub mod projects;
pub mod proposals;
pub mod tasks;
pub mod users;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{ErrorBody, ServiceError, ServiceResult};
pub use page::Page;
pub use projects::{
    create_project_request::CreateProjectRequest,
    project_dto::ProjectDto,
    project_with_tasks_dto::ProjectWithTasksDto,
    projects::{create_project, get_project, list_projects, list_user_projects},
};
pub use proposals::proposals::{accept_proposal, generate_proposal};
pub use tasks::{
    create_task_request::CreateTaskRequest,
    task_dto::TaskDto,
    tasks::{create_task, get_task, list_project_tasks, list_tasks, update_task_status},
    update_task_request::UpdateTaskRequest,
};
pub use users::{
    create_user_request::CreateUserRequest,
    user_dto::UserDto,
    user_with_projects_dto::UserWithProjectsDto,
    users::{create_user, get_user, list_users},
};
