mod common;

use common::{create_test_pool, create_test_project, create_test_user};

use cs_core::TaskStatus;
use cs_service::{
    CreateTaskRequest, Page, ServiceError, TaskDto, UpdateTaskRequest, create_task, get_task,
    list_project_tasks, list_tasks, update_task_status,
};

use googletest::prelude::*;
use sqlx::SqlitePool;
use uuid::Uuid;

async fn setup_task(pool: &SqlitePool) -> TaskDto {
    let user = create_test_user(pool).await;
    let project = create_test_project(pool, &user.id).await;
    create_task(
        pool,
        CreateTaskRequest {
            title: "Setup".to_string(),
            description: "criar o repositório".to_string(),
            project_id: project.id,
        },
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn given_existing_project_when_creating_task_then_task_is_pending() {
    let pool = create_test_pool().await;

    let task = setup_task(&pool).await;

    assert_that!(task.status, eq(TaskStatus::Pending));
    assert_that!(task.completed_at, none());
    assert_that!(get_task(&pool, &task.id).await.unwrap().title, eq("Setup"));
}

#[tokio::test]
async fn given_unknown_project_when_creating_task_then_not_found() {
    let pool = create_test_pool().await;

    let result = create_task(
        &pool,
        CreateTaskRequest {
            title: "Orphan".to_string(),
            description: String::new(),
            project_id: Uuid::new_v4().to_string(),
        },
    )
    .await;

    assert!(matches!(result, Err(ServiceError::NotFound { .. })));
}

#[tokio::test]
async fn given_pending_task_when_completed_then_completed_at_is_set() {
    // Given
    let pool = create_test_pool().await;
    let task = setup_task(&pool).await;

    // When
    let updated = update_task_status(
        &pool,
        &task.id,
        UpdateTaskRequest {
            status: TaskStatus::Completed,
        },
    )
    .await
    .unwrap();

    // Then
    assert_that!(updated.status, eq(TaskStatus::Completed));
    assert_that!(updated.completed_at, some(anything()));
}

#[tokio::test]
async fn given_completed_task_when_reset_to_pending_then_completed_at_is_cleared() {
    // Given
    let pool = create_test_pool().await;
    let task = setup_task(&pool).await;
    update_task_status(
        &pool,
        &task.id,
        UpdateTaskRequest {
            status: TaskStatus::Completed,
        },
    )
    .await
    .unwrap();

    // When
    let updated = update_task_status(
        &pool,
        &task.id,
        UpdateTaskRequest {
            status: TaskStatus::Pending,
        },
    )
    .await
    .unwrap();

    // Then
    assert_that!(updated.completed_at, none());
    assert_that!(get_task(&pool, &task.id).await.unwrap().completed_at, none());
}

#[tokio::test]
async fn given_unknown_task_when_updating_status_then_not_found() {
    let pool = create_test_pool().await;

    let result = update_task_status(
        &pool,
        &Uuid::new_v4().to_string(),
        UpdateTaskRequest {
            status: TaskStatus::Skipped,
        },
    )
    .await;

    assert!(matches!(result, Err(ServiceError::NotFound { .. })));
}

#[tokio::test]
async fn given_tasks_when_listing_then_all_and_per_project_lists_agree() {
    // Given
    let pool = create_test_pool().await;
    let task = setup_task(&pool).await;

    // When
    let all = list_tasks(&pool, Page::default()).await.unwrap();
    let in_project = list_project_tasks(&pool, &task.project_id).await.unwrap();

    // Then
    assert_that!(all, len(eq(1)));
    assert_that!(in_project, len(eq(1)));
    assert_that!(in_project[0].id, eq(&task.id));
}

#[tokio::test]
async fn given_unknown_project_when_listing_project_tasks_then_not_found() {
    let pool = create_test_pool().await;

    let result = list_project_tasks(&pool, &Uuid::new_v4().to_string()).await;

    assert!(matches!(result, Err(ServiceError::NotFound { .. })));
}

#[tokio::test]
async fn given_update_request_json_when_deserialized_then_status_parsed() {
    let request: UpdateTaskRequest = serde_json::from_str(r#"{"status":"SKIPPED"}"#).unwrap();

    assert_that!(request.status, eq(TaskStatus::Skipped));
}
