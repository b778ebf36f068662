use cs_core::{Project, ProjectType, Task, User};

use chrono::{Duration, Utc};
use uuid::Uuid;

/// Creates a test User with a unique email
pub fn create_test_user_model() -> User {
    let id = Uuid::new_v4();
    User::new(format!("user-{}@example.com", id), "Ada Lovelace".to_string())
}

/// Creates a test Project owned by `owner_id`
pub fn create_test_project(owner_id: Uuid) -> Project {
    Project::new(
        "Plataforma de Receitas".to_string(),
        "Uma aplicação para compartilhar receitas".to_string(),
        ProjectType::Fullstack,
        vec!["React".to_string(), "Node".to_string()],
        owner_id,
    )
}

/// Creates a pending Task; `offset_secs` spaces out creation times
pub fn create_test_task(project_id: Uuid, title: &str, offset_secs: i64) -> Task {
    let mut task = Task::new(title.to_string(), format!("{} details", title), project_id);
    task.created_at = Utc::now() + Duration::seconds(offset_secs);
    task
}
