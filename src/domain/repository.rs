//! Repository contract shared by every record type.
//!
//! Implemented per table in the infrastructure layer, following the
//! dependency inversion principle.

use async_trait::async_trait;

use super::entities::Record;
use crate::shared::error::AppError;

/// Data access operations for one record type.
#[async_trait]
pub trait CrudRepository<R: Record>: Send + Sync {
    /// All records, ordered by id.
    async fn find_all(&self) -> Result<Vec<R>, AppError>;

    /// Find a record by its id.
    async fn find_by_id(&self, id: i32) -> Result<Option<R>, AppError>;

    /// Store a new record. The database assigns the id.
    async fn insert(&self, draft: &R::Draft) -> Result<R, AppError>;

    /// Overwrite every column of record `id`.
    ///
    /// Returns `None` without writing anything if no such record exists.
    async fn update(&self, id: i32, draft: &R::Draft) -> Result<Option<R>, AppError>;

    /// Delete record `id`. Returns `false` if it did not exist.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}
