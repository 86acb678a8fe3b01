pub mod appointments;
pub mod doctors;
pub mod stories;
