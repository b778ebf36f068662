pub mod create_user_request;
pub mod user_dto;
pub mod user_with_projects_dto;
pub mod users;
