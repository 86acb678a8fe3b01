// src/application/dto/appointments.rs
use crate::domain::appointment::Appointment;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentDto {
    pub id: i64,
    pub doctor_id: i64,
    pub patient_id: i64,
    pub date: NaiveDate,
    pub time_slot: String,
    pub fee: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Appointment> for AppointmentDto {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id.into(),
            doctor_id: appointment.doctor_id.into(),
            patient_id: appointment.patient_id.into(),
            date: appointment.date,
            time_slot: appointment.time_slot.into(),
            fee: appointment.fee,
            created_at: appointment.created_at,
        }
    }
}
