//! Session Repository Implementation
//!
//! Break sessions and work sessions share one column layout, so a single
//! PostgreSQL repository serves both, parameterized by the record type.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

use crate::domain::{BreakSession, CrudRepository, Record, SessionDraft, WorkSession};
use crate::shared::error::AppError;

const COLUMNS: &str = "id, id_jornada, tiempo_inicio, tiempo_fin";

/// A session record and the table it lives in.
pub trait SessionRecord: Record<Draft = SessionDraft> + for<'r> FromRow<'r, PgRow> {
    const TABLE: &'static str;
}

impl SessionRecord for BreakSession {
    const TABLE: &'static str = "sesiones_descanso";
}

impl SessionRecord for WorkSession {
    const TABLE: &'static str = "sesiones_trabajo";
}

/// PostgreSQL repository for one session table.
pub struct PgSessionRepository<S> {
    pool: PgPool,
    _record: PhantomData<fn() -> S>,
}

pub type PgBreakSessionRepository = PgSessionRepository<BreakSession>;
pub type PgWorkSessionRepository = PgSessionRepository<WorkSession>;

impl<S: SessionRecord> PgSessionRepository<S> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<S: SessionRecord> CrudRepository<S> for PgSessionRepository<S> {
    async fn find_all(&self) -> Result<Vec<S>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", COLUMNS, S::TABLE);
        let sessions = sqlx::query_as::<_, S>(&sql).fetch_all(&self.pool).await?;

        Ok(sessions)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<S>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, S::TABLE);
        let session = sqlx::query_as::<_, S>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(session)
    }

    async fn insert(&self, draft: &SessionDraft) -> Result<S, AppError> {
        let sql = format!(
            "INSERT INTO {} (id_jornada, tiempo_inicio, tiempo_fin) VALUES ($1, $2, $3) RETURNING {}",
            S::TABLE,
            COLUMNS
        );
        let created = sqlx::query_as::<_, S>(&sql)
            .bind(draft.work_day_id)
            .bind(draft.start_time)
            .bind(draft.end_time)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn update(&self, id: i32, draft: &SessionDraft) -> Result<Option<S>, AppError> {
        let sql = format!(
            "UPDATE {} SET id_jornada = $2, tiempo_inicio = $3, tiempo_fin = $4 WHERE id = $1 RETURNING {}",
            S::TABLE,
            COLUMNS
        );
        let updated = sqlx::query_as::<_, S>(&sql)
            .bind(id)
            .bind(draft.work_day_id)
            .bind(draft.start_time)
            .bind(draft.end_time)
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", S::TABLE);
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
