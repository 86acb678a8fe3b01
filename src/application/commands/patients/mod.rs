mod login;
mod logout;
mod register;
mod service;
mod update_profile;

pub use login::{LoginPatientCommand, PatientLoginResult};
pub use register::{PatientRegistrationResult, RegisterPatientCommand};
pub use service::PatientCommandService;
pub use update_profile::UpdatePatientProfileCommand;
