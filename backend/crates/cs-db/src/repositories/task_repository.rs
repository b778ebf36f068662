use crate::repositories::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use cs_core::{Task, TaskStatus};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Executor, Row, Sqlite, SqlitePool};
use uuid::Uuid;

const TASK_COLUMNS: &str = "id, title, description, status, project_id, created_at, completed_at";

pub struct TaskRepository {
    pool: SqlitePool,
}

impl TaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, task: &Task) -> DbErrorResult<()> {
        Self::insert(&self.pool, task).await
    }

    /// Insert through any executor, so project creation can batch tasks into
    /// its own transaction.
    pub(crate) async fn insert<'e, E>(executor: E, task: &Task) -> DbErrorResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO tasks (
                    id, title, description, status, project_id, created_at, completed_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(task.id.to_string())
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status.as_str())
        .bind(task.project_id.to_string())
        .bind(task.created_at.timestamp())
        .bind(task.completed_at.map(|dt| dt.timestamp()))
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Task>> {
        let row = sqlx::query(&format!("SELECT {} FROM tasks WHERE id = ?", TASK_COLUMNS))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(task_from_row).transpose()
    }

    pub async fn find_all(&self, skip: i64, limit: i64) -> DbErrorResult<Vec<Task>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM tasks ORDER BY created_at, rowid LIMIT ? OFFSET ?",
            TASK_COLUMNS
        ))
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(task_from_row).collect()
    }

    /// Tasks of one project in the order they were written.
    pub async fn find_by_project(&self, project_id: Uuid) -> DbErrorResult<Vec<Task>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM tasks WHERE project_id = ? ORDER BY created_at, rowid",
            TASK_COLUMNS
        ))
        .bind(project_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(task_from_row).collect()
    }

    /// Move a task to `status`, stamping `completed_at` with `at` when it
    /// becomes Completed and clearing it otherwise. `None` if the task is gone.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: TaskStatus,
        at: DateTime<Utc>,
    ) -> DbErrorResult<Option<Task>> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(&format!("SELECT {} FROM tasks WHERE id = ?", TASK_COLUMNS))
            .bind(id.to_string())
            .fetch_optional(&mut *tx)
            .await?;

        let Some(mut task) = row.as_ref().map(task_from_row).transpose()? else {
            return Ok(None);
        };

        task.transition_to(status, at);

        sqlx::query("UPDATE tasks SET status = ?, completed_at = ? WHERE id = ?")
            .bind(task.status.as_str())
            .bind(task.completed_at.map(|dt| dt.timestamp()))
            .bind(task.id.to_string())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(task))
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn task_from_row(row: &SqliteRow) -> DbErrorResult<Task> {
    let status: String = row.try_get("status")?;
    let completed_at: Option<i64> = row.try_get("completed_at")?;

    Ok(Task {
        id: parse_uuid(row.try_get("id")?, "tasks.id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        status: TaskStatus::from_str(&status).map_err(|e| DbError::Initialization {
            message: format!("Invalid TaskStatus in tasks.status: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        project_id: parse_uuid(row.try_get("project_id")?, "tasks.project_id")?,
        created_at: parse_timestamp(row.try_get("created_at")?, "tasks.created_at")?,
        completed_at: completed_at
            .map(|ts| parse_timestamp(ts, "tasks.completed_at"))
            .transpose()?,
    })
}
