// tests/support/helpers.rs
use std::sync::Arc;

use karte_core::application::commands::{
    appointments::AppointmentCommandService, doctors::DoctorCommandService,
    patients::PatientCommandService, sessions::SessionIssuer, stories::StoryCommandService,
};
use karte_core::application::queries::{
    appointments::AppointmentQueryService, doctors::DoctorQueryService, stories::StoryQueryService,
};

use super::mocks::{
    DummyPasswordHasher, DummyTokenManager, FixedClock, InMemoryAppointmentRepo,
    InMemoryDoctorRepo, InMemoryPatientRepo, InMemoryStoryRepo,
};

pub fn session_issuer() -> SessionIssuer {
    SessionIssuer::new(Arc::new(DummyTokenManager))
}

pub fn patient_service(repo: Arc<InMemoryPatientRepo>) -> PatientCommandService {
    PatientCommandService::new(
        repo,
        Arc::new(DummyPasswordHasher),
        session_issuer(),
        Arc::new(FixedClock),
    )
}

pub fn doctor_service(repo: Arc<InMemoryDoctorRepo>) -> DoctorCommandService {
    DoctorCommandService::new(
        repo,
        Arc::new(DummyPasswordHasher),
        session_issuer(),
        Arc::new(FixedClock),
    )
}

pub fn story_service(repo: Arc<InMemoryStoryRepo>) -> StoryCommandService {
    StoryCommandService::new(repo, Arc::new(FixedClock))
}

pub fn appointment_service(
    appointments: Arc<InMemoryAppointmentRepo>,
    doctors: Arc<InMemoryDoctorRepo>,
) -> AppointmentCommandService {
    AppointmentCommandService::new(appointments, doctors, Arc::new(FixedClock))
}

pub fn story_queries(repo: Arc<InMemoryStoryRepo>) -> StoryQueryService {
    StoryQueryService::new(repo)
}

pub fn doctor_queries(repo: Arc<InMemoryDoctorRepo>) -> DoctorQueryService {
    DoctorQueryService::new(repo)
}

pub fn appointment_queries(repo: Arc<InMemoryAppointmentRepo>) -> AppointmentQueryService {
    AppointmentQueryService::new(repo)
}
