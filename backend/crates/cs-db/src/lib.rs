//! SQLite persistence for users, projects and tasks.

pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database::{connect, run_migrations};
pub use error::{DbError, Result};
pub use repositories::project_repository::ProjectRepository;
pub use repositories::task_repository::TaskRepository;
pub use repositories::user_repository::UserRepository;
