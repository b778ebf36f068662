pub mod create_task_request;
pub mod task_dto;
pub mod tasks;
pub mod update_task_request;
