// src/infrastructure/repositories/postgres_doctor.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identity::{
    DisplayName, Doctor, DoctorRepository, EmailAddress, IdentityId, NewDoctor, PasswordHash,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresDoctorRepository {
    pool: PgPool,
}

impl PostgresDoctorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DoctorRow {
    id: i64,
    full_name: String,
    email: String,
    password_hash: String,
    specializations: Vec<String>,
    license: String,
    fee: Option<i64>,
    certificate_path: String,
    profile_pic_path: String,
    refresh_token: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<DoctorRow> for Doctor {
    type Error = DomainError;

    fn try_from(row: DoctorRow) -> Result<Self, Self::Error> {
        Ok(Doctor {
            id: IdentityId::new(row.id)?,
            full_name: DisplayName::new(row.full_name)?,
            email: EmailAddress::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            specializations: row.specializations,
            license: row.license,
            fee: row.fee,
            certificate_path: row.certificate_path,
            profile_pic_path: row.profile_pic_path,
            refresh_token: row.refresh_token,
            created_at: row.created_at,
        })
    }
}

const DOCTOR_COLUMNS: &str = "id, full_name, email, password_hash, specializations, license, fee, \
                              certificate_path, profile_pic_path, refresh_token, created_at";

#[async_trait]
impl DoctorRepository for PostgresDoctorRepository {
    async fn insert(&self, new_doctor: NewDoctor) -> DomainResult<Doctor> {
        let NewDoctor {
            full_name,
            email,
            password_hash,
            specializations,
            license,
            fee,
            certificate_path,
            profile_pic_path,
            created_at,
        } = new_doctor;

        let row = sqlx::query_as::<_, DoctorRow>(&format!(
            "INSERT INTO doctors (full_name, email, password_hash, specializations, license, fee,
                                  certificate_path, profile_pic_path, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {DOCTOR_COLUMNS}"
        ))
        .bind(full_name.as_str())
        .bind(email.as_str())
        .bind(password_hash.as_str())
        .bind(&specializations)
        .bind(&license)
        .bind(fee)
        .bind(&certificate_path)
        .bind(&profile_pic_path)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Doctor::try_from(row)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Doctor>> {
        let row = sqlx::query_as::<_, DoctorRow>(&format!(
            "SELECT {DOCTOR_COLUMNS} FROM doctors WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Doctor::try_from).transpose()
    }

    async fn find_by_id(&self, id: IdentityId) -> DomainResult<Option<Doctor>> {
        let row = sqlx::query_as::<_, DoctorRow>(&format!(
            "SELECT {DOCTOR_COLUMNS} FROM doctors WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Doctor::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Doctor>> {
        let rows = sqlx::query_as::<_, DoctorRow>(&format!(
            "SELECT {DOCTOR_COLUMNS} FROM doctors ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Doctor::try_from).collect()
    }

    async fn set_refresh_token(
        &self,
        id: IdentityId,
        refresh_token: Option<&str>,
    ) -> DomainResult<()> {
        let result = sqlx::query("UPDATE doctors SET refresh_token = $2 WHERE id = $1")
            .bind(i64::from(id))
            .bind(refresh_token)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("doctor not found".into()));
        }
        Ok(())
    }
}
