// src/presentation/http/controllers/mod.rs
pub mod appointments;
pub mod doctors;
pub mod patients;
pub mod stories;
