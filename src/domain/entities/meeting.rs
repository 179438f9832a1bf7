//! Meeting entity. Maps to the `reuniones` table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Meeting {
    pub id: i32,

    #[serde(rename = "fecha")]
    #[sqlx(rename = "fecha")]
    pub date: Option<NaiveDate>,

    #[serde(rename = "titulo")]
    #[sqlx(rename = "titulo")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MeetingDraft {
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
}

impl Record for Meeting {
    type Draft = MeetingDraft;

    const RESOURCE: &'static str = "reuniones";
    const NAME: &'static str = "Meeting";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, draft: MeetingDraft) -> Self {
        Self {
            id,
            date: draft.date,
            title: draft.title,
        }
    }
}
