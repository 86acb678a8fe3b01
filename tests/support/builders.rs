// tests/support/builders.rs
use chrono::Duration;
use karte_core::application::dto::AuthenticatedUser;
use karte_core::domain::identity::{
    DisplayName, Doctor, EmailAddress, IdentityId, PasswordHash, Role,
};
use karte_core::domain::story::{Story, StoryBody, StoryCategory, StoryId, StoryTitle};

use super::mocks::{fixed_now, hashed};

pub fn patient_actor(id: i64) -> AuthenticatedUser {
    actor(id, Role::Patient)
}

pub fn doctor_actor(id: i64) -> AuthenticatedUser {
    actor(id, Role::Doctor)
}

fn actor(id: i64, role: Role) -> AuthenticatedUser {
    AuthenticatedUser {
        id: IdentityId::new(id).unwrap(),
        name: format!("user-{id}"),
        role,
        issued_at: fixed_now(),
        expires_at: fixed_now() + Duration::hours(1),
    }
}

pub struct DoctorBuilder {
    id: i64,
    full_name: String,
    email: String,
    fee: Option<i64>,
}

impl DoctorBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            full_name: format!("Dr. Test {id}"),
            email: format!("doctor{id}@clinic.test"),
            fee: None,
        }
    }

    pub fn fee(mut self, fee: i64) -> Self {
        self.fee = Some(fee);
        self
    }

    pub fn build(self) -> Doctor {
        Doctor {
            id: IdentityId::new(self.id).unwrap(),
            full_name: DisplayName::new(self.full_name).unwrap(),
            email: EmailAddress::new(self.email).unwrap(),
            password_hash: PasswordHash::new(hashed("doctorpass1")).unwrap(),
            specializations: vec!["general".into()],
            license: "LIC-1234".into(),
            fee: self.fee,
            certificate_path: "uploads/cert.pdf".into(),
            profile_pic_path: "uploads/pic.png".into(),
            refresh_token: None,
            created_at: fixed_now(),
        }
    }
}

pub struct StoryBuilder {
    id: i64,
    title: String,
    uploaded_by: i64,
    created_offset_minutes: i64,
}

impl StoryBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("story {id}"),
            uploaded_by: 1,
            created_offset_minutes: 0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn uploaded_by(mut self, uploader: i64) -> Self {
        self.uploaded_by = uploader;
        self
    }

    /// Shift creation time forward so ordering assertions have distinct
    /// timestamps to work with.
    pub fn created_minutes_later(mut self, minutes: i64) -> Self {
        self.created_offset_minutes = minutes;
        self
    }

    pub fn build(self) -> Story {
        let created_at = fixed_now() + Duration::minutes(self.created_offset_minutes);
        Story {
            id: StoryId::new(self.id).unwrap(),
            title: StoryTitle::new(self.title).unwrap(),
            category: StoryCategory::new("recovery").unwrap(),
            body: StoryBody::new("it went better than expected").unwrap(),
            uploaded_by: IdentityId::new(self.uploaded_by).unwrap(),
            comments: Vec::new(),
            created_at,
            updated_at: created_at,
        }
    }
}
