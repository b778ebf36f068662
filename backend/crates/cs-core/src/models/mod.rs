pub mod project;
pub mod project_proposal;
pub mod project_type;
pub mod proposal_request;
pub mod proposal_task;
pub mod task;
pub mod task_status;
pub mod user;
