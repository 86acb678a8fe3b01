mod login;
mod logout;
mod register;
mod service;

pub use login::{DoctorLoginResult, LoginDoctorCommand};
pub use register::{DoctorRegistrationResult, RegisterDoctorCommand};
pub use service::DoctorCommandService;
