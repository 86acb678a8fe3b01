// tests/support/mocks/identity_repos.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use karte_core::domain::errors::{DomainError, DomainResult};
use karte_core::domain::identity::{
    Doctor, DoctorRepository, EmailAddress, IdentityId, NewDoctor, NewPatient, Patient,
    PatientRepository, PatientUpdate,
};

/// In-memory patient store mirroring the Postgres table, including the
/// unique-email behaviour of the real insert.
pub struct InMemoryPatientRepo {
    inner: Mutex<PatientStore>,
}

struct PatientStore {
    rows: HashMap<i64, Patient>,
    next_id: i64,
}

impl InMemoryPatientRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(PatientStore {
                rows: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    pub fn get(&self, id: i64) -> Option<Patient> {
        self.inner.lock().unwrap().rows.get(&id).cloned()
    }
}

#[async_trait]
impl PatientRepository for InMemoryPatientRepo {
    async fn insert(&self, new_patient: NewPatient) -> DomainResult<Patient> {
        let mut store = self.inner.lock().unwrap();
        if store
            .rows
            .values()
            .any(|p| p.email == new_patient.email)
        {
            return Err(DomainError::Conflict("patient already exists".into()));
        }

        let id = store.next_id;
        store.next_id += 1;
        let patient = Patient {
            id: IdentityId::new(id).unwrap(),
            name: new_patient.name,
            email: new_patient.email,
            password_hash: new_patient.password_hash,
            refresh_token: None,
            created_at: new_patient.created_at,
        };
        store.rows.insert(id, patient.clone());
        Ok(patient)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Patient>> {
        let store = self.inner.lock().unwrap();
        Ok(store.rows.values().find(|p| &p.email == email).cloned())
    }

    async fn find_by_id(&self, id: IdentityId) -> DomainResult<Option<Patient>> {
        let store = self.inner.lock().unwrap();
        Ok(store.rows.get(&i64::from(id)).cloned())
    }

    async fn update(&self, update: PatientUpdate) -> DomainResult<Patient> {
        let mut store = self.inner.lock().unwrap();
        let patient = store
            .rows
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("patient not found".into()))?;

        if let Some(name) = update.name {
            patient.name = name;
        }
        if let Some(password_hash) = update.password_hash {
            patient.password_hash = password_hash;
        }
        Ok(patient.clone())
    }

    async fn set_refresh_token(
        &self,
        id: IdentityId,
        refresh_token: Option<&str>,
    ) -> DomainResult<()> {
        let mut store = self.inner.lock().unwrap();
        let patient = store
            .rows
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("patient not found".into()))?;
        patient.refresh_token = refresh_token.map(str::to_owned);
        Ok(())
    }
}

pub struct InMemoryDoctorRepo {
    inner: Mutex<DoctorStore>,
}

struct DoctorStore {
    rows: HashMap<i64, Doctor>,
    next_id: i64,
}

impl InMemoryDoctorRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(DoctorStore {
                rows: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    pub fn with_doctors(doctors: Vec<Doctor>) -> Self {
        let next_id = doctors
            .iter()
            .map(|d| i64::from(d.id))
            .max()
            .unwrap_or(0)
            + 1;
        let rows = doctors
            .into_iter()
            .map(|d| (i64::from(d.id), d))
            .collect();
        Self {
            inner: Mutex::new(DoctorStore { rows, next_id }),
        }
    }

    pub fn get(&self, id: i64) -> Option<Doctor> {
        self.inner.lock().unwrap().rows.get(&id).cloned()
    }
}

#[async_trait]
impl DoctorRepository for InMemoryDoctorRepo {
    async fn insert(&self, new_doctor: NewDoctor) -> DomainResult<Doctor> {
        let mut store = self.inner.lock().unwrap();
        if store.rows.values().any(|d| d.email == new_doctor.email) {
            return Err(DomainError::Conflict("doctor already exists".into()));
        }

        let id = store.next_id;
        store.next_id += 1;
        let doctor = Doctor {
            id: IdentityId::new(id).unwrap(),
            full_name: new_doctor.full_name,
            email: new_doctor.email,
            password_hash: new_doctor.password_hash,
            specializations: new_doctor.specializations,
            license: new_doctor.license,
            fee: new_doctor.fee,
            certificate_path: new_doctor.certificate_path,
            profile_pic_path: new_doctor.profile_pic_path,
            refresh_token: None,
            created_at: new_doctor.created_at,
        };
        store.rows.insert(id, doctor.clone());
        Ok(doctor)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Doctor>> {
        let store = self.inner.lock().unwrap();
        Ok(store.rows.values().find(|d| &d.email == email).cloned())
    }

    async fn find_by_id(&self, id: IdentityId) -> DomainResult<Option<Doctor>> {
        let store = self.inner.lock().unwrap();
        Ok(store.rows.get(&i64::from(id)).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Doctor>> {
        let store = self.inner.lock().unwrap();
        let mut doctors: Vec<Doctor> = store.rows.values().cloned().collect();
        doctors.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(doctors)
    }

    async fn set_refresh_token(
        &self,
        id: IdentityId,
        refresh_token: Option<&str>,
    ) -> DomainResult<()> {
        let mut store = self.inner.lock().unwrap();
        let doctor = store
            .rows
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("doctor not found".into()))?;
        doctor.refresh_token = refresh_token.map(str::to_owned);
        Ok(())
    }
}
