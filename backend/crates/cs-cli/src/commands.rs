use crate::{
    project_commands::ProjectCommands, proposal_commands::ProposalCommands,
    task_commands::TaskCommands, user_commands::UserCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// User operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Project operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// Task operations
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Draft project proposals from an agent pipeline transcript
    Proposal {
        #[command(subcommand)]
        action: ProposalCommands,
    },
}
