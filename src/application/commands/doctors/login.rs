// src/application/commands/doctors/login.rs
use super::DoctorCommandService;
use crate::application::commands::sessions::INVALID_CREDENTIALS;
use crate::application::{
    dto::{AuthTokenDto, DoctorDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::identity::EmailAddress;

pub struct LoginDoctorCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct DoctorLoginResult {
    pub token: AuthTokenDto,
    pub user: DoctorDto,
}

impl DoctorCommandService {
    pub async fn login(&self, command: LoginDoctorCommand) -> ApplicationResult<DoctorLoginResult> {
        let email = EmailAddress::new(command.email)?;

        let doctor = self
            .doctor_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized(INVALID_CREDENTIALS))?;

        self.password_hasher
            .verify(&command.password, doctor.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => {
                    ApplicationError::unauthorized(INVALID_CREDENTIALS)
                }
                other => other,
            })?;

        let session = self.open_session(&doctor).await?;

        Ok(DoctorLoginResult {
            token: session.access,
            user: doctor.into(),
        })
    }
}
