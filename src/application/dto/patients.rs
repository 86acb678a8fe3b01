// src/application/dto/patients.rs
use crate::domain::identity::Patient;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire view of a patient. The password hash and refresh token have no
/// field here, so they cannot leak by accident.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<Patient> for PatientDto {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id.into(),
            name: patient.name.into(),
            email: patient.email.into(),
            created_at: patient.created_at,
        }
    }
}
