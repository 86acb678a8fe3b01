// src/application/commands/appointments/service.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::appointment::AppointmentRepository;
use crate::domain::identity::DoctorRepository;

/// Fee charged when a doctor has not configured one.
pub(super) const DEFAULT_CONSULTATION_FEE: i64 = 1000;

pub struct AppointmentCommandService {
    pub(super) appointment_repo: Arc<dyn AppointmentRepository>,
    pub(super) doctor_repo: Arc<dyn DoctorRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AppointmentCommandService {
    pub fn new(
        appointment_repo: Arc<dyn AppointmentRepository>,
        doctor_repo: Arc<dyn DoctorRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            appointment_repo,
            doctor_repo,
            clock,
        }
    }
}
