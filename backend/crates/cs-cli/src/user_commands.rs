use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a user
    Create {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
    },
    /// List users
    List {
        #[arg(long, default_value_t = 0)]
        skip: u32,
        #[arg(long, default_value_t = 100)]
        limit: u32,
    },
    /// Get a user and their projects
    Get {
        /// User ID (UUID)
        id: String,
    },
}
