// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            appointments::AppointmentCommandService, doctors::DoctorCommandService,
            patients::PatientCommandService, sessions::SessionIssuer,
            stories::StoryCommandService,
        },
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::{
            appointments::AppointmentQueryService, doctors::DoctorQueryService,
            stories::StoryQueryService,
        },
    },
    domain::{
        appointment::AppointmentRepository,
        identity::{DoctorRepository, PatientRepository},
        story::StoryRepository,
    },
};

pub struct ApplicationServices {
    pub patient_commands: Arc<PatientCommandService>,
    pub doctor_commands: Arc<DoctorCommandService>,
    pub story_commands: Arc<StoryCommandService>,
    pub appointment_commands: Arc<AppointmentCommandService>,
    pub doctor_queries: Arc<DoctorQueryService>,
    pub story_queries: Arc<StoryQueryService>,
    pub appointment_queries: Arc<AppointmentQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        patient_repo: Arc<dyn PatientRepository>,
        doctor_repo: Arc<dyn DoctorRepository>,
        story_repo: Arc<dyn StoryRepository>,
        appointment_repo: Arc<dyn AppointmentRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let sessions = SessionIssuer::new(Arc::clone(&token_manager));

        let patient_commands = Arc::new(PatientCommandService::new(
            Arc::clone(&patient_repo),
            Arc::clone(&password_hasher),
            sessions.clone(),
            Arc::clone(&clock),
        ));

        let doctor_commands = Arc::new(DoctorCommandService::new(
            Arc::clone(&doctor_repo),
            Arc::clone(&password_hasher),
            sessions,
            Arc::clone(&clock),
        ));

        let story_commands = Arc::new(StoryCommandService::new(
            Arc::clone(&story_repo),
            Arc::clone(&clock),
        ));

        let appointment_commands = Arc::new(AppointmentCommandService::new(
            Arc::clone(&appointment_repo),
            Arc::clone(&doctor_repo),
            Arc::clone(&clock),
        ));

        let doctor_queries = Arc::new(DoctorQueryService::new(Arc::clone(&doctor_repo)));
        let story_queries = Arc::new(StoryQueryService::new(Arc::clone(&story_repo)));
        let appointment_queries =
            Arc::new(AppointmentQueryService::new(Arc::clone(&appointment_repo)));

        Self {
            patient_commands,
            doctor_commands,
            story_commands,
            appointment_commands,
            doctor_queries,
            story_queries,
            appointment_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
