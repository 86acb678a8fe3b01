mod postgres_appointment;
mod postgres_doctor;
mod postgres_patient;
mod postgres_story;

pub use postgres_appointment::PostgresAppointmentRepository;
pub use postgres_doctor::PostgresDoctorRepository;
pub use postgres_patient::PostgresPatientRepository;
pub use postgres_story::PostgresStoryRepository;

use crate::domain::errors::DomainError;

const CNT_PATIENT_EMAIL: &str = "patients_email_key";
const CNT_DOCTOR_EMAIL: &str = "doctors_email_key";
const CNT_APPOINTMENT_SLOT: &str = "appointments_doctor_slot_key";
const CNT_APPOINTMENT_DOCTOR: &str = "appointments_doctor_id_fkey";
const CNT_APPOINTMENT_PATIENT: &str = "appointments_patient_id_fkey";
const CNT_STORY_UPLOADER: &str = "stories_uploaded_by_fkey";

/// Translate sqlx failures into domain errors. Named constraints carry the
/// interesting semantics: the unique index on (doctor_id, date, time_slot)
/// is what makes concurrent double-booking impossible, and it surfaces
/// here as a conflict.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_PATIENT_EMAIL => DomainError::Conflict("patient already exists".into()),
                    CNT_DOCTOR_EMAIL => DomainError::Conflict("doctor already exists".into()),
                    CNT_APPOINTMENT_SLOT => {
                        DomainError::Conflict("slot is already booked".into())
                    }
                    CNT_APPOINTMENT_DOCTOR => DomainError::NotFound("doctor not found".into()),
                    CNT_APPOINTMENT_PATIENT => DomainError::NotFound("patient not found".into()),
                    CNT_STORY_UPLOADER => DomainError::NotFound("patient not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
