pub mod create_project_request;
pub mod project_dto;
pub mod project_with_tasks_dto;
pub mod projects;
