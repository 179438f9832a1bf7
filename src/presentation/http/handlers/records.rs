//! Record Handlers
//!
//! HTTP handlers shared by every resource under `/api`. Each handler is
//! generic over the record type; the service is pulled out of `AppState`
//! through `FromRef`.
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | GET | /api/{resource} | 200 + array, 204 if empty | |
//! | GET | /api/{resource}/{id} | 200 + object | 404 |
//! | POST | /api/{resource} | 201 + created object | 400 |
//! | PUT | /api/{resource}/{id} | 200 + updated object | 404, 400 |
//! | DELETE | /api/{resource}/{id} | 204 | 404 |

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::services::{RecordError, RecordService};
use crate::domain::Record;
use crate::presentation::http::extractors::{Payload, RecordId};
use crate::shared::error::AppError;
use crate::shared::validation::{field_errors, validation_message};

/// Helper to convert RecordError to AppError
fn map_record_error(e: RecordError) -> AppError {
    match e {
        RecordError::NotFound { resource, id } => {
            AppError::NotFound(format!("{} {} not found", resource, id))
        }
        RecordError::Validation(errors) => AppError::Validation {
            message: validation_message(&errors),
            errors: field_errors(&errors),
        },
        RecordError::Internal(msg) => AppError::Internal(msg),
    }
}

/// List all records
///
/// GET /api/{resource}
pub async fn list<R: Record>(
    State(service): State<RecordService<R>>,
) -> Result<Response, AppError> {
    let records = service.list().await.map_err(map_record_error)?;

    if records.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(records).into_response())
}

/// Get a record by id
///
/// GET /api/{resource}/{id}
pub async fn get<R: Record>(
    State(service): State<RecordService<R>>,
    RecordId(id): RecordId,
) -> Result<Json<R>, AppError> {
    let record = service.get(id).await.map_err(map_record_error)?;
    Ok(Json(record))
}

/// Create a record
///
/// POST /api/{resource}
///
/// Any `id` in the body is ignored; the database assigns one.
pub async fn create<R: Record>(
    State(service): State<RecordService<R>>,
    Payload(draft): Payload<R::Draft>,
) -> Result<(StatusCode, Json<R>), AppError> {
    let record = service.create(draft).await.map_err(map_record_error)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Overwrite a record
///
/// PUT /api/{resource}/{id}
///
/// Every column is replaced; fields missing from the body become null.
pub async fn update<R: Record>(
    State(service): State<RecordService<R>>,
    RecordId(id): RecordId,
    Payload(draft): Payload<R::Draft>,
) -> Result<Json<R>, AppError> {
    let record = service.update(id, draft).await.map_err(map_record_error)?;
    Ok(Json(record))
}

/// Delete a record
///
/// DELETE /api/{resource}/{id}
pub async fn delete<R: Record>(
    State(service): State<RecordService<R>>,
    RecordId(id): RecordId,
) -> Result<StatusCode, AppError> {
    if service.delete(id).await.map_err(map_record_error)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("{} {} not found", R::NAME, id)))
    }
}
