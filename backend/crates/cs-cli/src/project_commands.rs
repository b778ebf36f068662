use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Create a project owned by a user
    Create {
        /// Owner user ID (UUID)
        #[arg(long)]
        owner_id: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// backend, frontend or fullstack
        #[arg(long = "type")]
        project_type: String,
        /// Technology to use (repeatable)
        #[arg(long = "tech")]
        technologies: Vec<String>,
    },
    /// List projects
    List {
        #[arg(long, default_value_t = 0)]
        skip: u32,
        #[arg(long, default_value_t = 100)]
        limit: u32,
    },
    /// Get a project and its tasks
    Get {
        /// Project ID (UUID)
        id: String,
    },
    /// List the projects owned by a user
    ByUser {
        /// User ID (UUID)
        user_id: String,
    },
}
