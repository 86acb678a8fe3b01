// src/application/commands/doctors/logout.rs
use super::DoctorCommandService;
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

impl DoctorCommandService {
    pub async fn logout(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        if !actor.is_doctor() {
            return Err(ApplicationError::forbidden("not a doctor session"));
        }

        self.doctor_repo
            .set_refresh_token(actor.id, None)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to clear refresh token");
                ApplicationError::infrastructure("failed to close session")
            })
    }
}
