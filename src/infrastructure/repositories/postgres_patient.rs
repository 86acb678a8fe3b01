// src/infrastructure/repositories/postgres_patient.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identity::{
    DisplayName, EmailAddress, IdentityId, NewPatient, PasswordHash, Patient, PatientRepository,
    PatientUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresPatientRepository {
    pool: PgPool,
}

impl PostgresPatientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PatientRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    refresh_token: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<PatientRow> for Patient {
    type Error = DomainError;

    fn try_from(row: PatientRow) -> Result<Self, Self::Error> {
        Ok(Patient {
            id: IdentityId::new(row.id)?,
            name: DisplayName::new(row.name)?,
            email: EmailAddress::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            refresh_token: row.refresh_token,
            created_at: row.created_at,
        })
    }
}

const PATIENT_COLUMNS: &str = "id, name, email, password_hash, refresh_token, created_at";

#[async_trait]
impl PatientRepository for PostgresPatientRepository {
    async fn insert(&self, new_patient: NewPatient) -> DomainResult<Patient> {
        let NewPatient {
            name,
            email,
            password_hash,
            created_at,
        } = new_patient;

        let row = sqlx::query_as::<_, PatientRow>(&format!(
            "INSERT INTO patients (name, email, password_hash, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {PATIENT_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(email.as_str())
        .bind(password_hash.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Patient::try_from(row)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Patient>> {
        let row = sqlx::query_as::<_, PatientRow>(&format!(
            "SELECT {PATIENT_COLUMNS} FROM patients WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Patient::try_from).transpose()
    }

    async fn find_by_id(&self, id: IdentityId) -> DomainResult<Option<Patient>> {
        let row = sqlx::query_as::<_, PatientRow>(&format!(
            "SELECT {PATIENT_COLUMNS} FROM patients WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Patient::try_from).transpose()
    }

    async fn update(&self, update: PatientUpdate) -> DomainResult<Patient> {
        let row = sqlx::query_as::<_, PatientRow>(&format!(
            "UPDATE patients
             SET name = COALESCE($2, name),
                 password_hash = COALESCE($3, password_hash)
             WHERE id = $1
             RETURNING {PATIENT_COLUMNS}"
        ))
        .bind(i64::from(update.id))
        .bind(update.name.as_ref().map(DisplayName::as_str))
        .bind(update.password_hash.as_ref().map(PasswordHash::as_str))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("patient not found".into()))?;

        Patient::try_from(row)
    }

    async fn set_refresh_token(
        &self,
        id: IdentityId,
        refresh_token: Option<&str>,
    ) -> DomainResult<()> {
        let result = sqlx::query("UPDATE patients SET refresh_token = $2 WHERE id = $1")
            .bind(i64::from(id))
            .bind(refresh_token)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("patient not found".into()));
        }
        Ok(())
    }
}
