// tests/support/mocks/mod.rs
pub mod appointment_repo;
pub mod identity_repos;
pub mod security;
pub mod story_repo;
pub mod time;

pub use appointment_repo::InMemoryAppointmentRepo;
pub use identity_repos::{InMemoryDoctorRepo, InMemoryPatientRepo};
pub use security::{DummyPasswordHasher, DummyTokenManager, hashed};
pub use story_repo::InMemoryStoryRepo;
pub use time::{FixedClock, fixed_now};
