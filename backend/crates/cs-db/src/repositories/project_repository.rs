//! Project repository.
//!
//! Technologies are stored as a JSON array in a single text column, keeping
//! the order the user gave them.

use crate::repositories::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult, TaskRepository};

use cs_core::{Project, ProjectType, Task};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use log::debug;
use sqlx::sqlite::SqliteRow;
use sqlx::{Executor, Row, Sqlite, SqlitePool};
use uuid::Uuid;

const PROJECT_COLUMNS: &str =
    "id, title, description, project_type, technologies, owner_id, is_active, created_at";

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, project: &Project) -> DbErrorResult<()> {
        Self::insert(&self.pool, project).await
    }

    /// Write a project and its tasks atomically: either all rows land or none.
    pub async fn create_with_tasks(&self, project: &Project, tasks: &[Task]) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        Self::insert(&mut *tx, project).await?;
        for task in tasks {
            TaskRepository::insert(&mut *tx, task).await?;
        }

        tx.commit().await?;
        debug!(
            "Project {} written with {} tasks",
            project.id,
            tasks.len()
        );

        Ok(())
    }

    async fn insert<'e, E>(executor: E, project: &Project) -> DbErrorResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let technologies = encode_technologies(&project.technologies)?;

        sqlx::query(
            r#"
                INSERT INTO projects (
                    id, title, description, project_type, technologies,
                    owner_id, is_active, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.project_type.as_str())
        .bind(technologies)
        .bind(project.owner_id.to_string())
        .bind(project.is_active)
        .bind(project.created_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM projects WHERE id = ?",
            PROJECT_COLUMNS
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(project_from_row).transpose()
    }

    pub async fn find_all(&self, skip: i64, limit: i64) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM projects ORDER BY created_at, rowid LIMIT ? OFFSET ?",
            PROJECT_COLUMNS
        ))
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(project_from_row).collect()
    }

    pub async fn find_by_owner(&self, owner_id: Uuid) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM projects WHERE owner_id = ? ORDER BY created_at, rowid",
            PROJECT_COLUMNS
        ))
        .bind(owner_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(project_from_row).collect()
    }

    pub async fn update(&self, project: &Project) -> DbErrorResult<()> {
        let technologies = encode_technologies(&project.technologies)?;

        sqlx::query(
            r#"
                UPDATE projects
                SET title = ?, description = ?, project_type = ?, technologies = ?,
                    is_active = ?
                WHERE id = ?
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.project_type.as_str())
        .bind(technologies)
        .bind(project.is_active)
        .bind(project.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Returns false when no such project existed. Its tasks go with it.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[track_caller]
fn encode_technologies(technologies: &[String]) -> DbErrorResult<String> {
    serde_json::to_string(technologies).map_err(|source| DbError::Serialization {
        column: "projects.technologies",
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}

fn project_from_row(row: &SqliteRow) -> DbErrorResult<Project> {
    let project_type: String = row.try_get("project_type")?;
    let technologies: String = row.try_get("technologies")?;

    Ok(Project {
        id: parse_uuid(row.try_get("id")?, "projects.id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        project_type: ProjectType::from_str(&project_type).map_err(|e| {
            DbError::Initialization {
                message: format!("Invalid ProjectType in projects.project_type: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        technologies: serde_json::from_str(&technologies).map_err(|source| {
            DbError::Serialization {
                column: "projects.technologies",
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        owner_id: parse_uuid(row.try_get("owner_id")?, "projects.owner_id")?,
        is_active: row.try_get("is_active")?,
        created_at: parse_timestamp(row.try_get("created_at")?, "projects.created_at")?,
    })
}
