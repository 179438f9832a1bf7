//! Meeting Repository Implementation
//!
//! PostgreSQL implementation of meeting operations on the `reuniones` table.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{CrudRepository, Meeting, MeetingDraft};
use crate::shared::error::AppError;

pub struct PgMeetingRepository {
    pool: PgPool,
}

impl PgMeetingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Meeting> for PgMeetingRepository {
    async fn find_all(&self) -> Result<Vec<Meeting>, AppError> {
        let meetings =
            sqlx::query_as::<_, Meeting>("SELECT id, fecha, titulo FROM reuniones ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(meetings)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Meeting>, AppError> {
        let meeting =
            sqlx::query_as::<_, Meeting>("SELECT id, fecha, titulo FROM reuniones WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(meeting)
    }

    async fn insert(&self, draft: &MeetingDraft) -> Result<Meeting, AppError> {
        let created = sqlx::query_as::<_, Meeting>(
            r#"
            INSERT INTO reuniones (fecha, titulo)
            VALUES ($1, $2)
            RETURNING id, fecha, titulo
            "#,
        )
        .bind(draft.date)
        .bind(&draft.title)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, id: i32, draft: &MeetingDraft) -> Result<Option<Meeting>, AppError> {
        let updated = sqlx::query_as::<_, Meeting>(
            r#"
            UPDATE reuniones
            SET fecha = $2, titulo = $3
            WHERE id = $1
            RETURNING id, fecha, titulo
            "#,
        )
        .bind(id)
        .bind(draft.date)
        .bind(&draft.title)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM reuniones WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
