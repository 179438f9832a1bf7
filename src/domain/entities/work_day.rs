//! Work day entity.
//!
//! Maps to the `jornada` table:
//! - id: INTEGER GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY
//! - fecha: DATE NULL
//! - empleado_id: INTEGER NOT NULL DEFAULT 0 (employee id by convention, no foreign key)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Record;

/// One employee's working day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct WorkDay {
    pub id: i32,

    #[serde(rename = "fecha")]
    #[sqlx(rename = "fecha")]
    pub date: Option<NaiveDate>,

    #[serde(rename = "empleadoId")]
    #[sqlx(rename = "empleado_id")]
    pub employee_id: i32,
}

/// Create/update payload for [`WorkDay`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct WorkDayDraft {
    #[serde(
        rename = "fecha",
        alias = "date",
        default,
        deserialize_with = "super::date_format::optional_date"
    )]
    pub date: Option<NaiveDate>,

    #[serde(rename = "empleadoId", alias = "employeeId", default)]
    pub employee_id: i32,
}

impl Record for WorkDay {
    type Draft = WorkDayDraft;

    const RESOURCE: &'static str = "jornadas";
    const NAME: &'static str = "WorkDay";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, draft: WorkDayDraft) -> Self {
        Self {
            id,
            date: draft.date,
            employee_id: draft.employee_id,
        }
    }
}
