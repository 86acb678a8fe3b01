pub mod appointments;
pub mod doctors;
pub mod password;
pub mod patients;
pub mod sessions;
pub mod stories;
