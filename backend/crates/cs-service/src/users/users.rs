use crate::validation::{require_email, require_non_empty};
use crate::{
    CreateUserRequest, Page, ProjectDto, ServiceError, ServiceResult, UserDto,
    UserWithProjectsDto,
};

use cs_core::User;
use cs_db::{ProjectRepository, UserRepository};

use log::info;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Register a user. Emails are unique.
pub async fn create_user(pool: &SqlitePool, request: CreateUserRequest) -> ServiceResult<UserDto> {
    let email = require_email(&request.email)?;
    let name = require_non_empty(&request.name, "name")?;

    let repo = UserRepository::new(pool.clone());
    if repo.find_by_email(&email).await?.is_some() {
        return Err(ServiceError::conflict(format!(
            "Email {} is already registered",
            email
        )));
    }

    let user = User::new(email, name);
    repo.create(&user).await?;

    info!("Created user {} ({})", user.id, user.email);
    Ok(user.into())
}

pub async fn list_users(pool: &SqlitePool, page: Page) -> ServiceResult<Vec<UserDto>> {
    let (skip, limit) = page.bounds();
    let users = UserRepository::new(pool.clone()).find_all(skip, limit).await?;

    Ok(users.into_iter().map(UserDto::from).collect())
}

pub async fn get_user(pool: &SqlitePool, id: &str) -> ServiceResult<UserWithProjectsDto> {
    let user_id = Uuid::parse_str(id)?;

    let user = UserRepository::new(pool.clone())
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("User {} not found", id)))?;

    let projects = ProjectRepository::new(pool.clone())
        .find_by_owner(user_id)
        .await?;

    Ok(UserWithProjectsDto {
        user: user.into(),
        projects: projects.into_iter().map(ProjectDto::from).collect(),
    })
}
