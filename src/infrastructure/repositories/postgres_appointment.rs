// src/infrastructure/repositories/postgres_appointment.rs
use super::map_sqlx;
use crate::domain::appointment::{
    Appointment, AppointmentId, AppointmentRepository, NewAppointment, TimeSlot,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identity::IdentityId;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresAppointmentRepository {
    pool: PgPool,
}

impl PostgresAppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AppointmentRow {
    id: i64,
    doctor_id: i64,
    patient_id: i64,
    date: NaiveDate,
    time_slot: String,
    fee: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<AppointmentRow> for Appointment {
    type Error = DomainError;

    fn try_from(row: AppointmentRow) -> Result<Self, Self::Error> {
        Ok(Appointment {
            id: AppointmentId::new(row.id)?,
            doctor_id: IdentityId::new(row.doctor_id)?,
            patient_id: IdentityId::new(row.patient_id)?,
            date: row.date,
            time_slot: TimeSlot::new(row.time_slot)?,
            fee: row.fee,
            created_at: row.created_at,
        })
    }
}

const APPOINTMENT_COLUMNS: &str = "id, doctor_id, patient_id, date, time_slot, fee, created_at";

#[async_trait]
impl AppointmentRepository for PostgresAppointmentRepository {
    /// The insert races against concurrent bookings of the same triple;
    /// the `appointments_doctor_slot_key` unique index arbitrates, and the
    /// loser gets a conflict from `map_sqlx`.
    async fn insert(&self, new_appointment: NewAppointment) -> DomainResult<Appointment> {
        let NewAppointment {
            doctor_id,
            patient_id,
            date,
            time_slot,
            fee,
            created_at,
        } = new_appointment;

        let row = sqlx::query_as::<_, AppointmentRow>(&format!(
            "INSERT INTO appointments (doctor_id, patient_id, date, time_slot, fee, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {APPOINTMENT_COLUMNS}"
        ))
        .bind(i64::from(doctor_id))
        .bind(i64::from(patient_id))
        .bind(date)
        .bind(time_slot.as_str())
        .bind(fee)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Appointment::try_from(row)
    }

    async fn find_by_slot(
        &self,
        doctor_id: IdentityId,
        date: NaiveDate,
        time_slot: &TimeSlot,
    ) -> DomainResult<Option<Appointment>> {
        let row = sqlx::query_as::<_, AppointmentRow>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments
             WHERE doctor_id = $1 AND date = $2 AND time_slot = $3"
        ))
        .bind(i64::from(doctor_id))
        .bind(date)
        .bind(time_slot.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Appointment::try_from).transpose()
    }

    async fn list_by_doctor(&self, doctor_id: IdentityId) -> DomainResult<Vec<Appointment>> {
        let rows = sqlx::query_as::<_, AppointmentRow>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments
             WHERE doctor_id = $1 ORDER BY date, time_slot"
        ))
        .bind(i64::from(doctor_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Appointment::try_from).collect()
    }

    async fn list_by_patient(&self, patient_id: IdentityId) -> DomainResult<Vec<Appointment>> {
        let rows = sqlx::query_as::<_, AppointmentRow>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments
             WHERE patient_id = $1 ORDER BY date, time_slot"
        ))
        .bind(i64::from(patient_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Appointment::try_from).collect()
    }
}
