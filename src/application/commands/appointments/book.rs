// src/application/commands/appointments/book.rs
use super::{AppointmentCommandService, service::DEFAULT_CONSULTATION_FEE};
use crate::application::{
    dto::{AppointmentDto, AuthenticatedUser},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::appointment::{NewAppointment, TimeSlot};
use crate::domain::identity::IdentityId;
use chrono::NaiveDate;

pub struct BookAppointmentCommand {
    pub doctor_id: i64,
    pub date: String,
    pub time_slot: String,
}

impl AppointmentCommandService {
    /// Reserve one doctor/date/slot triple for the acting patient.
    ///
    /// The existence pre-check below only buys a friendly error message.
    /// Correctness under concurrent requests comes from the storage-level
    /// unique constraint on the triple: when two bookings race, one insert
    /// loses and surfaces here as a conflict.
    pub async fn book(
        &self,
        actor: &AuthenticatedUser,
        command: BookAppointmentCommand,
    ) -> ApplicationResult<AppointmentDto> {
        if !actor.is_patient() {
            return Err(ApplicationError::forbidden(
                "only patients can book appointments",
            ));
        }

        let doctor_id = IdentityId::new(command.doctor_id)?;
        let date = parse_date(&command.date)?;
        let time_slot = TimeSlot::new(command.time_slot)?;

        let doctor = self
            .doctor_repo
            .find_by_id(doctor_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("doctor not found"))?;

        if self
            .appointment_repo
            .find_by_slot(doctor_id, date, &time_slot)
            .await?
            .is_some()
        {
            return Err(slot_taken());
        }

        let appointment = self
            .appointment_repo
            .insert(NewAppointment {
                doctor_id,
                patient_id: actor.id,
                date,
                time_slot,
                fee: doctor.fee.unwrap_or(DEFAULT_CONSULTATION_FEE),
                created_at: self.clock.now(),
            })
            .await
            .map_err(|err| match err {
                crate::domain::errors::DomainError::Conflict(_) => slot_taken(),
                other => other.into(),
            })?;

        Ok(appointment.into())
    }
}

fn parse_date(value: &str) -> ApplicationResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        ApplicationError::validation(format!("'{value}' is not a valid YYYY-MM-DD date"))
    })
}

fn slot_taken() -> ApplicationError {
    ApplicationError::conflict("this slot is already booked, please choose another")
}
