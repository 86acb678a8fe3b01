// src/application/dto/doctors.rs
use crate::domain::identity::Doctor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire view of a doctor, safe for the public directory endpoints: no
/// password hash, no refresh token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorDto {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub specializations: Vec<String>,
    pub license: String,
    pub fee: Option<i64>,
    pub certificate_path: String,
    pub profile_pic_path: String,
    pub created_at: DateTime<Utc>,
}

impl From<Doctor> for DoctorDto {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id.into(),
            full_name: doctor.full_name.into(),
            email: doctor.email.into(),
            specializations: doctor.specializations,
            license: doctor.license,
            fee: doctor.fee,
            certificate_path: doctor.certificate_path,
            profile_pic_path: doctor.profile_pic_path,
            created_at: doctor.created_at,
        }
    }
}
