//! Break and work sessions.
//!
//! Both are time ranges within a work day and share one column layout:
//! - id: INTEGER GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY
//! - id_jornada: INTEGER NULL (work day id by convention, no foreign key)
//! - tiempo_inicio: TIME NULL
//! - tiempo_fin: TIME NULL
//!
//! Ranges are stored as given: an end before the start, or two sessions
//! overlapping, is not rejected.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Record;

/// A break taken during a work day (`sesiones_descanso`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct BreakSession {
    pub id: i32,

    #[serde(rename = "idJornada")]
    #[sqlx(rename = "id_jornada")]
    pub work_day_id: Option<i32>,

    #[serde(rename = "tiempoInicio")]
    #[sqlx(rename = "tiempo_inicio")]
    pub start_time: Option<NaiveTime>,

    #[serde(rename = "tiempoFin")]
    #[sqlx(rename = "tiempo_fin")]
    pub end_time: Option<NaiveTime>,
}

/// A stretch of work during a work day (`sesiones_trabajo`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct WorkSession {
    pub id: i32,

    #[serde(rename = "idJornada")]
    #[sqlx(rename = "id_jornada")]
    pub work_day_id: Option<i32>,

    #[serde(rename = "tiempoInicio")]
    #[sqlx(rename = "tiempo_inicio")]
    pub start_time: Option<NaiveTime>,

    #[serde(rename = "tiempoFin")]
    #[sqlx(rename = "tiempo_fin")]
    pub end_time: Option<NaiveTime>,
}

/// Create/update payload shared by both session kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SessionDraft {
    #[serde(rename = "idJornada", alias = "workDayId")]
    pub work_day_id: Option<i32>,

    #[serde(rename = "tiempoInicio", alias = "startTime")]
    pub start_time: Option<NaiveTime>,

    #[serde(rename = "tiempoFin", alias = "endTime")]
    pub end_time: Option<NaiveTime>,
}

impl Record for BreakSession {
    type Draft = SessionDraft;

    const RESOURCE: &'static str = "sesionesDescanso";
    const NAME: &'static str = "BreakSession";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, draft: SessionDraft) -> Self {
        Self {
            id,
            work_day_id: draft.work_day_id,
            start_time: draft.start_time,
            end_time: draft.end_time,
        }
    }
}

impl Record for WorkSession {
    type Draft = SessionDraft;

    const RESOURCE: &'static str = "sesionesTrabajo";
    const NAME: &'static str = "WorkSession";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, draft: SessionDraft) -> Self {
        Self {
            id,
            work_day_id: draft.work_day_id,
            start_time: draft.start_time,
            end_time: draft.end_time,
        }
    }
}
