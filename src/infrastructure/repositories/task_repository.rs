//! Task Repository Implementation
//!
//! PostgreSQL implementation of task operations on the `tareas` table.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{CrudRepository, Task, TaskDraft};
use crate::shared::error::AppError;

pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Task> for PgTaskRepository {
    async fn find_all(&self) -> Result<Vec<Task>, AppError> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, fecha, titulo, estado FROM tareas ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Task>, AppError> {
        let task = sqlx::query_as::<_, Task>(
            "SELECT id, fecha, titulo, estado FROM tareas WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    async fn insert(&self, draft: &TaskDraft) -> Result<Task, AppError> {
        let created = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tareas (fecha, titulo, estado)
            VALUES ($1, $2, $3)
            RETURNING id, fecha, titulo, estado
            "#,
        )
        .bind(draft.date)
        .bind(&draft.title)
        .bind(&draft.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, id: i32, draft: &TaskDraft) -> Result<Option<Task>, AppError> {
        let updated = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tareas
            SET fecha = $2, titulo = $3, estado = $4
            WHERE id = $1
            RETURNING id, fecha, titulo, estado
            "#,
        )
        .bind(id)
        .bind(draft.date)
        .bind(&draft.title)
        .bind(&draft.status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM tareas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
