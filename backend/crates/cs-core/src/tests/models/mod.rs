mod project;
mod project_type;
mod proposal_request;
mod task;
mod task_status;
