pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Doctor, NewDoctor, NewPatient, Patient, PatientUpdate};
pub use repository::{DoctorRepository, PatientRepository};
pub use value_objects::{DisplayName, EmailAddress, IdentityId, PasswordHash, Role};
