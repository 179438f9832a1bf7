//! Employee Repository Implementation
//!
//! PostgreSQL implementation of employee operations on the `empleados` table.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{CrudRepository, Employee, EmployeeDraft};
use crate::shared::error::AppError;

/// PostgreSQL implementation of the employee repository.
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    /// Creates a new PgEmployeeRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Employee> for PgEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, nombre, apellido, correo, rol, equipo, foto_url
            FROM empleados
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, nombre, apellido, correo, rol, equipo, foto_url
            FROM empleados
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn insert(&self, draft: &EmployeeDraft) -> Result<Employee, AppError> {
        let created = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO empleados (nombre, apellido, correo, rol, equipo, foto_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, nombre, apellido, correo, rol, equipo, foto_url
            "#,
        )
        .bind(&draft.first_name)
        .bind(&draft.last_name)
        .bind(&draft.email)
        .bind(&draft.role)
        .bind(&draft.team)
        .bind(&draft.photo_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, id: i32, draft: &EmployeeDraft) -> Result<Option<Employee>, AppError> {
        let updated = sqlx::query_as::<_, Employee>(
            r#"
            UPDATE empleados
            SET nombre = $2, apellido = $3, correo = $4, rol = $5, equipo = $6, foto_url = $7
            WHERE id = $1
            RETURNING id, nombre, apellido, correo, rol, equipo, foto_url
            "#,
        )
        .bind(id)
        .bind(&draft.first_name)
        .bind(&draft.last_name)
        .bind(&draft.email)
        .bind(&draft.role)
        .bind(&draft.team)
        .bind(&draft.photo_url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM empleados WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
