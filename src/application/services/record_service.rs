//! Record Service
//!
//! The five operations every resource supports: list, get, create, update
//! and delete. One generic implementation serves all record types.

use std::sync::Arc;

use validator::{Validate, ValidationErrors};

use crate::domain::{CrudRepository, Record};
use crate::infrastructure::metrics;

/// Record service errors.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i32 },

    #[error("Invalid payload: {0}")]
    Validation(ValidationErrors),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// CRUD service for one record type.
pub struct RecordService<R: Record> {
    repo: Arc<dyn CrudRepository<R>>,
}

impl<R: Record> Clone for RecordService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: Record> RecordService<R> {
    pub fn new(repo: Arc<dyn CrudRepository<R>>) -> Self {
        Self { repo }
    }

    /// All records of this type.
    pub async fn list(&self) -> Result<Vec<R>, RecordError> {
        let records = self
            .repo
            .find_all()
            .await
            .map_err(|e| RecordError::Internal(e.to_string()))?;

        tracing::debug!(resource = R::NAME, count = records.len(), "Listed records");
        Ok(records)
    }

    /// Get a record by id.
    pub async fn get(&self, id: i32) -> Result<R, RecordError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| RecordError::Internal(e.to_string()))?
            .ok_or(RecordError::NotFound {
                resource: R::NAME,
                id,
            })
    }

    /// Store a new record and return it with its assigned id.
    pub async fn create(&self, draft: R::Draft) -> Result<R, RecordError> {
        draft.validate().map_err(RecordError::Validation)?;

        let record = self
            .repo
            .insert(&draft)
            .await
            .map_err(|e| RecordError::Internal(e.to_string()))?;

        metrics::record_write(R::NAME, "create");
        tracing::info!(resource = R::NAME, id = record.id(), "Record created");
        Ok(record)
    }

    /// Overwrite record `id` with `draft`. The path id always wins.
    pub async fn update(&self, id: i32, draft: R::Draft) -> Result<R, RecordError> {
        draft.validate().map_err(RecordError::Validation)?;

        let record = self
            .repo
            .update(id, &draft)
            .await
            .map_err(|e| RecordError::Internal(e.to_string()))?
            .ok_or(RecordError::NotFound {
                resource: R::NAME,
                id,
            })?;

        metrics::record_write(R::NAME, "update");
        tracing::info!(resource = R::NAME, id, "Record updated");
        Ok(record)
    }

    /// Delete record `id`. Returns `false` if it did not exist.
    pub async fn delete(&self, id: i32) -> Result<bool, RecordError> {
        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| RecordError::Internal(e.to_string()))?;

        if deleted {
            metrics::record_write(R::NAME, "delete");
            tracing::info!(resource = R::NAME, id, "Record deleted");
        } else {
            tracing::debug!(resource = R::NAME, id, "Delete of missing record");
        }
        Ok(deleted)
    }
}
