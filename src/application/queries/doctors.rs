// src/application/queries/doctors.rs
use std::sync::Arc;

use crate::application::{
    dto::DoctorDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::identity::{DoctorRepository, IdentityId};

pub struct GetDoctorQuery {
    pub doctor_id: i64,
}

pub struct DoctorQueryService {
    doctor_repo: Arc<dyn DoctorRepository>,
}

impl DoctorQueryService {
    pub fn new(doctor_repo: Arc<dyn DoctorRepository>) -> Self {
        Self { doctor_repo }
    }

    /// Public directory; the DTO carries no credential material.
    pub async fn list_doctors(&self) -> ApplicationResult<Vec<DoctorDto>> {
        let doctors = self.doctor_repo.list().await?;
        Ok(doctors.into_iter().map(DoctorDto::from).collect())
    }

    pub async fn get_doctor(&self, query: GetDoctorQuery) -> ApplicationResult<DoctorDto> {
        let id = IdentityId::new(query.doctor_id)?;
        let doctor = self
            .doctor_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("doctor not found"))?;
        Ok(doctor.into())
    }
}
