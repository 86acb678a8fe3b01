// src/application/commands/patients/update_profile.rs
use super::PatientCommandService;
use crate::application::commands::password::validate_password;
use crate::application::{
    dto::{AuthenticatedUser, PatientDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::identity::{DisplayName, PasswordHash, Patient, PatientUpdate};

pub struct UpdatePatientProfileCommand {
    pub name: Option<String>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

impl PatientCommandService {
    /// Partial profile update: only supplied fields change. A password
    /// change must present the current password.
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePatientProfileCommand,
    ) -> ApplicationResult<PatientDto> {
        if !actor.is_patient() {
            return Err(ApplicationError::forbidden("not a patient session"));
        }

        let patient = self
            .patient_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("patient not found"))?;

        let mut update = PatientUpdate::new(patient.id);

        if let Some(name) = command.name {
            update = update.with_name(DisplayName::new(name)?);
        }

        if let Some(new_password) = command.new_password {
            update = update
                .with_password_hash(self.rotate_password(&patient, command.current_password.as_deref(), &new_password).await?);
        }

        if update.is_empty() {
            return Ok(patient.into());
        }

        let updated = self.patient_repo.update(update).await?;
        Ok(updated.into())
    }

    async fn rotate_password(
        &self,
        patient: &Patient,
        current_password: Option<&str>,
        new_password: &str,
    ) -> ApplicationResult<PasswordHash> {
        let current = current_password
            .ok_or_else(|| ApplicationError::validation("current password is required"))?;

        self.password_hasher
            .verify(current, patient.password_hash.as_str())
            .await?;

        validate_password(new_password)?;
        let hashed = self.password_hasher.hash(new_password).await?;
        Ok(PasswordHash::new(hashed)?)
    }
}
