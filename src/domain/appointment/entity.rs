// src/domain/appointment/entity.rs
use crate::domain::appointment::value_objects::{AppointmentId, TimeSlot};
use crate::domain::identity::IdentityId;
use chrono::{DateTime, NaiveDate, Utc};

/// A confirmed reservation of one doctor's slot by one patient. The fee is
/// a snapshot of the doctor's configured fee at booking time.
#[derive(Debug, Clone)]
pub struct Appointment {
    pub id: AppointmentId,
    pub doctor_id: IdentityId,
    pub patient_id: IdentityId,
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
    pub fee: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub doctor_id: IdentityId,
    pub patient_id: IdentityId,
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
    pub fee: i64,
    pub created_at: DateTime<Utc>,
}
