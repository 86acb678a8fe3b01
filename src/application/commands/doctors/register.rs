// src/application/commands/doctors/register.rs
use super::DoctorCommandService;
use crate::application::commands::password::validate_password;
use crate::application::{
    dto::{AuthTokenDto, DoctorDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::identity::{DisplayName, EmailAddress, NewDoctor, PasswordHash};

pub struct RegisterDoctorCommand {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub specializations: Vec<String>,
    pub license: String,
    pub fee: Option<i64>,
    /// Stored-path reference returned by the upload collaborator.
    pub certificate_path: String,
    /// Stored-path reference returned by the upload collaborator.
    pub profile_pic_path: String,
}

#[derive(Debug)]
pub struct DoctorRegistrationResult {
    pub token: AuthTokenDto,
    pub doctor: DoctorDto,
}

impl DoctorCommandService {
    pub async fn register(
        &self,
        command: RegisterDoctorCommand,
    ) -> ApplicationResult<DoctorRegistrationResult> {
        let full_name = DisplayName::new(command.full_name)?;
        let email = EmailAddress::new(command.email)?;
        validate_password(&command.password)?;

        if command.license.trim().is_empty() {
            return Err(ApplicationError::validation("license is required"));
        }
        if command.specializations.iter().all(|s| s.trim().is_empty()) {
            return Err(ApplicationError::validation(
                "at least one specialization is required",
            ));
        }
        if command.certificate_path.trim().is_empty() || command.profile_pic_path.trim().is_empty()
        {
            return Err(ApplicationError::validation(
                "both certificate and profile picture are required",
            ));
        }

        if self.doctor_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict("doctor already exists"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let specializations = command
            .specializations
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let doctor = self
            .doctor_repo
            .insert(NewDoctor {
                full_name,
                email,
                password_hash,
                specializations,
                license: command.license,
                fee: command.fee,
                certificate_path: command.certificate_path,
                profile_pic_path: command.profile_pic_path,
                created_at: self.clock.now(),
            })
            .await?;

        let session = self.open_session(&doctor).await?;

        Ok(DoctorRegistrationResult {
            token: session.access,
            doctor: doctor.into(),
        })
    }
}
