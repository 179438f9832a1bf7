//! Work Day Repository Implementation
//!
//! PostgreSQL implementation of work day operations on the `jornada` table.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{CrudRepository, WorkDay, WorkDayDraft};
use crate::shared::error::AppError;

/// PostgreSQL implementation of the work day repository.
pub struct PgWorkDayRepository {
    pool: PgPool,
}

impl PgWorkDayRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<WorkDay> for PgWorkDayRepository {
    async fn find_all(&self) -> Result<Vec<WorkDay>, AppError> {
        let days = sqlx::query_as::<_, WorkDay>(
            "SELECT id, fecha, empleado_id FROM jornada ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(days)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<WorkDay>, AppError> {
        let day = sqlx::query_as::<_, WorkDay>(
            "SELECT id, fecha, empleado_id FROM jornada WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(day)
    }

    async fn insert(&self, draft: &WorkDayDraft) -> Result<WorkDay, AppError> {
        let created = sqlx::query_as::<_, WorkDay>(
            r#"
            INSERT INTO jornada (fecha, empleado_id)
            VALUES ($1, $2)
            RETURNING id, fecha, empleado_id
            "#,
        )
        .bind(draft.date)
        .bind(draft.employee_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, id: i32, draft: &WorkDayDraft) -> Result<Option<WorkDay>, AppError> {
        let updated = sqlx::query_as::<_, WorkDay>(
            r#"
            UPDATE jornada
            SET fecha = $2, empleado_id = $3
            WHERE id = $1
            RETURNING id, fecha, empleado_id
            "#,
        )
        .bind(id)
        .bind(draft.date)
        .bind(draft.employee_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM jornada WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
