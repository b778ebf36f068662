use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProposalCommands {
    /// Parse a saved transcript into a proposal (no pipeline call)
    Parse {
        /// Transcript file
        transcript: PathBuf,
        /// Requested technology (repeatable)
        #[arg(long = "tech")]
        technologies: Vec<String>,
    },
    /// Run the agent pipeline and draft a proposal
    Generate {
        /// backend, frontend or fullstack
        #[arg(long = "type")]
        project_type: String,
        /// Requested technology (repeatable)
        #[arg(long = "tech")]
        technologies: Vec<String>,
        /// Extra context for the project definition stage
        #[arg(long)]
        info: Option<String>,
        /// Replay a recorded transcript instead of calling the pipeline URL
        #[arg(long)]
        transcript: Option<PathBuf>,
        /// Persist the proposal as a project owned by this user
        #[arg(long)]
        accept_for: Option<String>,
    },
}
