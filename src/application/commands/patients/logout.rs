// src/application/commands/patients/logout.rs
use super::PatientCommandService;
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

impl PatientCommandService {
    /// Invalidate the server-side session by clearing the single
    /// refresh-token slot.
    pub async fn logout(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        if !actor.is_patient() {
            return Err(ApplicationError::forbidden("not a patient session"));
        }

        self.patient_repo
            .set_refresh_token(actor.id, None)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to clear refresh token");
                ApplicationError::infrastructure("failed to close session")
            })
    }
}
