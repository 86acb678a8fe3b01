// src/application/commands/patients/register.rs
use super::PatientCommandService;
use crate::application::commands::password::validate_password;
use crate::application::{
    dto::{AuthTokenDto, PatientDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::identity::{DisplayName, EmailAddress, NewPatient, PasswordHash};

pub struct RegisterPatientCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct PatientRegistrationResult {
    pub token: AuthTokenDto,
    pub patient: PatientDto,
}

impl PatientCommandService {
    pub async fn register(
        &self,
        command: RegisterPatientCommand,
    ) -> ApplicationResult<PatientRegistrationResult> {
        let name = DisplayName::new(command.name)?;
        let email = EmailAddress::new(command.email)?;
        validate_password(&command.password)?;

        // Friendly pre-check; the unique index on email is the real guard.
        if self.patient_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict("patient already exists"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let patient = self
            .patient_repo
            .insert(NewPatient {
                name,
                email,
                password_hash,
                created_at: self.clock.now(),
            })
            .await?;

        let session = self.open_session(&patient).await?;

        Ok(PatientRegistrationResult {
            token: session.access,
            patient: patient.into(),
        })
    }
}
