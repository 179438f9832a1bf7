//! # Domain Entities
//!
//! Records managed by the schedule server. Each maps directly to one table.
//!
//! - **Employee**: a member of staff (`empleados`)
//! - **WorkDay**: one employee's working day (`jornada`)
//! - **Meeting**: a dated meeting (`reuniones`)
//! - **BreakSession**: a break within a work day (`sesiones_descanso`)
//! - **WorkSession**: a work stretch within a work day (`sesiones_trabajo`)
//! - **Task**: a dated task with a free-text status (`tareas`)
//!
//! Every record has a companion *draft*: the client payload, i.e. every
//! column except the database-assigned `id`. A client-supplied `id` is not
//! part of a draft and is dropped during deserialization.
//!
//! Wire names are the camelCase Spanish names existing clients send; the
//! English names are accepted as aliases on input.

mod date_format;
mod employee;
mod work_day;
mod meeting;
mod sessions;
mod task;

use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

pub use employee::{Employee, EmployeeDraft};
pub use work_day::{WorkDay, WorkDayDraft};
pub use meeting::{Meeting, MeetingDraft};
pub use sessions::{BreakSession, SessionDraft, WorkSession};
pub use task::{Task, TaskDraft};

/// A persisted record type with a database-assigned integer id.
pub trait Record: Serialize + Clone + Send + Sync + Unpin + 'static {
    /// Client payload for create and update.
    type Draft: DeserializeOwned + Serialize + Validate + Clone + Send + Sync + 'static;

    /// Path segment under `/api`.
    const RESOURCE: &'static str;

    /// Name used in logs and error messages.
    const NAME: &'static str;

    fn id(&self) -> i32;

    /// Build the stored form of `draft` under `id`.
    fn from_draft(id: i32, draft: Self::Draft) -> Self;
}
