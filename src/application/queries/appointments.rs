// src/application/queries/appointments.rs
use std::sync::Arc;

use crate::application::{
    dto::{AppointmentDto, AuthenticatedUser},
    error::ApplicationResult,
};
use crate::domain::appointment::AppointmentRepository;
use crate::domain::identity::IdentityId;

pub struct AppointmentsByDoctorQuery {
    pub doctor_id: i64,
}

pub struct AppointmentQueryService {
    appointment_repo: Arc<dyn AppointmentRepository>,
}

impl AppointmentQueryService {
    pub fn new(appointment_repo: Arc<dyn AppointmentRepository>) -> Self {
        Self { appointment_repo }
    }

    pub async fn by_doctor(
        &self,
        query: AppointmentsByDoctorQuery,
    ) -> ApplicationResult<Vec<AppointmentDto>> {
        let doctor_id = IdentityId::new(query.doctor_id)?;
        let appointments = self.appointment_repo.list_by_doctor(doctor_id).await?;
        Ok(appointments.into_iter().map(AppointmentDto::from).collect())
    }

    /// The caller's own reservations.
    pub async fn for_patient(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<AppointmentDto>> {
        let appointments = self.appointment_repo.list_by_patient(actor.id).await?;
        Ok(appointments.into_iter().map(AppointmentDto::from).collect())
    }
}
