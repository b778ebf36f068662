#![allow(dead_code)]

use cs_core::ProjectType;
use cs_service::{CreateProjectRequest, CreateUserRequest, ProjectDto, UserDto};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    cs_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn create_test_user(pool: &SqlitePool) -> UserDto {
    cs_service::create_user(
        pool,
        CreateUserRequest {
            email: format!("user-{}@example.com", Uuid::new_v4()),
            name: "Ada Lovelace".to_string(),
        },
    )
    .await
    .expect("Failed to create test user")
}

pub async fn create_test_project(pool: &SqlitePool, owner_id: &str) -> ProjectDto {
    cs_service::create_project(
        pool,
        owner_id,
        CreateProjectRequest {
            title: "Plataforma de Receitas".to_string(),
            description: "Compartilhe receitas".to_string(),
            project_type: ProjectType::Fullstack,
            technologies: vec!["React".to_string(), "Node".to_string()],
        },
    )
    .await
    .expect("Failed to create test project")
}
