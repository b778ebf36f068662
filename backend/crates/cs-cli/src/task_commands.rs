use clap::Subcommand;

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Create a task in a project
    Create {
        /// Project ID (UUID)
        #[arg(long)]
        project_id: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List tasks
    List {
        #[arg(long, default_value_t = 0)]
        skip: u32,
        #[arg(long, default_value_t = 100)]
        limit: u32,
    },
    /// Get a task by ID
    Get {
        /// Task ID (UUID)
        id: String,
    },
    /// Change a task's status
    SetStatus {
        /// Task ID (UUID)
        id: String,
        /// pending, completed or skipped
        status: String,
    },
    /// List the tasks of a project
    ByProject {
        /// Project ID (UUID)
        project_id: String,
    },
}
