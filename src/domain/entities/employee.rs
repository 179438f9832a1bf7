//! Employee entity.
//!
//! Maps to the `empleados` table:
//! - id: INTEGER GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY
//! - nombre, apellido, correo, rol, equipo, foto_url: VARCHAR(255) NULL

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Record;

/// A member of staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Employee {
    pub id: i32,

    #[serde(rename = "nombre")]
    #[sqlx(rename = "nombre")]
    pub first_name: Option<String>,

    #[serde(rename = "apellido")]
    #[sqlx(rename = "apellido")]
    pub last_name: Option<String>,

    #[serde(rename = "correo")]
    #[sqlx(rename = "correo")]
    pub email: Option<String>,

    #[serde(rename = "rol")]
    #[sqlx(rename = "rol")]
    pub role: Option<String>,

    #[serde(rename = "equipo")]
    #[sqlx(rename = "equipo")]
    pub team: Option<String>,

    #[serde(rename = "fotoUrl")]
    #[sqlx(rename = "foto_url")]
    pub photo_url: Option<String>,
}

/// Create/update payload for [`Employee`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EmployeeDraft {
    #[serde(rename = "nombre", alias = "name", alias = "firstName")]
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub first_name: Option<String>,

    #[serde(rename = "apellido", alias = "lastName")]
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub last_name: Option<String>,

    #[serde(rename = "correo", alias = "email")]
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub email: Option<String>,

    #[serde(rename = "rol", alias = "role")]
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub role: Option<String>,

    #[serde(rename = "equipo", alias = "team")]
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub team: Option<String>,

    #[serde(rename = "fotoUrl", alias = "photoUrl")]
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub photo_url: Option<String>,
}

impl Record for Employee {
    type Draft = EmployeeDraft;

    const RESOURCE: &'static str = "empleados";
    const NAME: &'static str = "Employee";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, draft: EmployeeDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            role: draft.role,
            team: draft.team,
            photo_url: draft.photo_url,
        }
    }
}
