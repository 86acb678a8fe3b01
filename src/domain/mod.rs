pub mod appointment;
pub mod errors;
pub mod identity;
pub mod story;
