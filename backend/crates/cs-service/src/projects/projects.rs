use crate::validation::{clean_technologies, require_non_empty};
use crate::{
    CreateProjectRequest, Page, ProjectDto, ProjectWithTasksDto, ServiceError, ServiceResult,
    TaskDto,
};

use cs_core::Project;
use cs_db::{ProjectRepository, TaskRepository, UserRepository};

use log::info;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Create a project owned by `owner_id`, which must be an existing user.
pub async fn create_project(
    pool: &SqlitePool,
    owner_id: &str,
    request: CreateProjectRequest,
) -> ServiceResult<ProjectDto> {
    let owner_uuid = Uuid::parse_str(owner_id)?;
    let title = require_non_empty(&request.title, "title")?;

    UserRepository::new(pool.clone())
        .find_by_id(owner_uuid)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("User {} not found", owner_id)))?;

    let project = Project::new(
        title,
        request.description.trim().to_string(),
        request.project_type,
        clean_technologies(&request.technologies),
        owner_uuid,
    );
    ProjectRepository::new(pool.clone()).create(&project).await?;

    info!("Created project {} for user {}", project.id, owner_id);
    Ok(project.into())
}

pub async fn list_projects(pool: &SqlitePool, page: Page) -> ServiceResult<Vec<ProjectDto>> {
    let (skip, limit) = page.bounds();
    let projects = ProjectRepository::new(pool.clone())
        .find_all(skip, limit)
        .await?;

    Ok(projects.into_iter().map(ProjectDto::from).collect())
}

pub async fn get_project(pool: &SqlitePool, id: &str) -> ServiceResult<ProjectWithTasksDto> {
    let project_id = Uuid::parse_str(id)?;

    let project = ProjectRepository::new(pool.clone())
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("Project {} not found", id)))?;

    let tasks = TaskRepository::new(pool.clone())
        .find_by_project(project_id)
        .await?;

    Ok(ProjectWithTasksDto {
        project: project.into(),
        tasks: tasks.into_iter().map(TaskDto::from).collect(),
    })
}

/// Projects owned by a user; unknown users are an error, not an empty list.
pub async fn list_user_projects(pool: &SqlitePool, user_id: &str) -> ServiceResult<Vec<ProjectDto>> {
    let owner_uuid = Uuid::parse_str(user_id)?;

    UserRepository::new(pool.clone())
        .find_by_id(owner_uuid)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("User {} not found", user_id)))?;

    let projects = ProjectRepository::new(pool.clone())
        .find_by_owner(owner_uuid)
        .await?;

    Ok(projects.into_iter().map(ProjectDto::from).collect())
}
