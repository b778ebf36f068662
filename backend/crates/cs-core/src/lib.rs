pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, CoreResult};
pub use models::project::Project;
pub use models::project_proposal::ProjectProposal;
pub use models::project_type::ProjectType;
pub use models::proposal_request::ProposalRequest;
pub use models::proposal_task::ProposalTask;
pub use models::task::Task;
pub use models::task_status::TaskStatus;
pub use models::user::User;
