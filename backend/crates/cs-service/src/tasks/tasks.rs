use crate::validation::require_non_empty;
use crate::{CreateTaskRequest, Page, ServiceError, ServiceResult, TaskDto, UpdateTaskRequest};

use cs_core::Task;
use cs_db::{ProjectRepository, TaskRepository};

use chrono::Utc;
use log::info;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Add a pending task to an existing project.
pub async fn create_task(pool: &SqlitePool, request: CreateTaskRequest) -> ServiceResult<TaskDto> {
    let title = require_non_empty(&request.title, "title")?;
    let project_id = Uuid::parse_str(&request.project_id)?;

    ensure_project_exists(pool, project_id).await?;

    let task = Task::new(title, request.description.trim().to_string(), project_id);
    TaskRepository::new(pool.clone()).create(&task).await?;

    info!("Created task {} in project {}", task.id, project_id);
    Ok(task.into())
}

pub async fn list_tasks(pool: &SqlitePool, page: Page) -> ServiceResult<Vec<TaskDto>> {
    let (skip, limit) = page.bounds();
    let tasks = TaskRepository::new(pool.clone()).find_all(skip, limit).await?;

    Ok(tasks.into_iter().map(TaskDto::from).collect())
}

pub async fn get_task(pool: &SqlitePool, id: &str) -> ServiceResult<TaskDto> {
    let task_id = Uuid::parse_str(id)?;

    let task = TaskRepository::new(pool.clone())
        .find_by_id(task_id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("Task {} not found", id)))?;

    Ok(task.into())
}

/// Completing a task stamps `completedAt`; any other status clears it.
pub async fn update_task_status(
    pool: &SqlitePool,
    id: &str,
    request: UpdateTaskRequest,
) -> ServiceResult<TaskDto> {
    let task_id = Uuid::parse_str(id)?;

    let task = TaskRepository::new(pool.clone())
        .update_status(task_id, request.status, Utc::now())
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("Task {} not found", id)))?;

    info!("Task {} is now {}", task.id, task.status);
    Ok(task.into())
}

pub async fn list_project_tasks(pool: &SqlitePool, project_id: &str) -> ServiceResult<Vec<TaskDto>> {
    let project_uuid = Uuid::parse_str(project_id)?;

    ensure_project_exists(pool, project_uuid).await?;

    let tasks = TaskRepository::new(pool.clone())
        .find_by_project(project_uuid)
        .await?;

    Ok(tasks.into_iter().map(TaskDto::from).collect())
}

async fn ensure_project_exists(pool: &SqlitePool, project_id: Uuid) -> ServiceResult<()> {
    ProjectRepository::new(pool.clone())
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("Project {} not found", project_id)))?;

    Ok(())
}
