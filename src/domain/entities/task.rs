//! Task entity.
//!
//! Maps to the `tareas` table. `estado` is free text; there is no fixed set
//! of states and no transition rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Task {
    pub id: i32,

    #[serde(rename = "fecha")]
    #[sqlx(rename = "fecha")]
    pub date: Option<NaiveDate>,

    #[serde(rename = "titulo")]
    #[sqlx(rename = "titulo")]
    pub title: Option<String>,

    #[serde(rename = "estado")]
    #[sqlx(rename = "estado")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TaskDraft {
    #[serde(
        rename = "fecha",
        alias = "date",
        default,
        deserialize_with = "super::date_format::optional_date"
    )]
    pub date: Option<NaiveDate>,

    #[serde(rename = "titulo", alias = "title")]
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub title: Option<String>,

    #[serde(rename = "estado", alias = "status")]
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub status: Option<String>,
}

impl Record for Task {
    type Draft = TaskDraft;

    const RESOURCE: &'static str = "tareas";
    const NAME: &'static str = "Task";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, draft: TaskDraft) -> Self {
        Self {
            id,
            date: draft.date,
            title: draft.title,
            status: draft.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("pendiente" ; "spanish state")]
    #[test_case("done" ; "english state")]
    #[test_case("" ; "empty state")]
    fn test_any_status_text_is_accepted(status: &str) {
        let draft = TaskDraft {
            status: Some(status.to_string()),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());
    }

    #[test_case(255, true ; "at column width")]
    #[test_case(256, false ; "past column width")]
    fn test_title_length_limit(len: usize, ok: bool) {
        let draft = TaskDraft {
            title: Some("t".repeat(len)),
            ..Default::default()
        };
        assert_eq!(draft.validate().is_ok(), ok);
    }
}
