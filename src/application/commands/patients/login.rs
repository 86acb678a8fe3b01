// src/application/commands/patients/login.rs
use super::PatientCommandService;
use crate::application::commands::sessions::INVALID_CREDENTIALS;
use crate::application::{
    dto::{AuthTokenDto, PatientDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::identity::EmailAddress;

pub struct LoginPatientCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct PatientLoginResult {
    pub token: AuthTokenDto,
    pub user: PatientDto,
}

impl PatientCommandService {
    pub async fn login(&self, command: LoginPatientCommand) -> ApplicationResult<PatientLoginResult> {
        let email = EmailAddress::new(command.email)?;

        let patient = self
            .patient_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized(INVALID_CREDENTIALS))?;

        self.password_hasher
            .verify(&command.password, patient.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => {
                    ApplicationError::unauthorized(INVALID_CREDENTIALS)
                }
                other => other,
            })?;

        let session = self.open_session(&patient).await?;

        Ok(PatientLoginResult {
            token: session.access,
            user: patient.into(),
        })
    }
}
