// tests/session_unit.rs
use std::sync::Arc;

mod support;

use karte_core::application::commands::doctors::{LoginDoctorCommand, RegisterDoctorCommand};
use karte_core::application::commands::patients::{LoginPatientCommand, RegisterPatientCommand};
use karte_core::application::commands::sessions::INVALID_CREDENTIALS;
use karte_core::application::error::ApplicationError;
use support::mocks::{InMemoryDoctorRepo, InMemoryPatientRepo};

async fn seed_patient(service: &karte_core::application::commands::patients::PatientCommandService) -> i64 {
    service
        .register(RegisterPatientCommand {
            name: "Alex Sato".into(),
            email: "alex@example.com".into(),
            password: "sunny1day".into(),
        })
        .await
        .unwrap()
        .patient
        .id
}

fn doctor_register_command() -> RegisterDoctorCommand {
    RegisterDoctorCommand {
        full_name: "Dr. Mori".into(),
        email: "mori@clinic.test".into(),
        password: "stetho2scope".into(),
        specializations: vec!["cardiology".into(), " ".into()],
        license: "LIC-9".into(),
        fee: Some(2500),
        certificate_path: "uploads/cert.pdf".into(),
        profile_pic_path: "uploads/pic.png".into(),
    }
}

#[tokio::test]
async fn login_rotates_the_refresh_token() {
    let repo = Arc::new(InMemoryPatientRepo::new());
    let service = support::patient_service(Arc::clone(&repo));
    let id = seed_patient(&service).await;

    let after_register = repo.get(id).unwrap().refresh_token.unwrap();

    service
        .login(LoginPatientCommand {
            email: "alex@example.com".into(),
            password: "sunny1day".into(),
        })
        .await
        .unwrap();

    let after_login = repo.get(id).unwrap().refresh_token.unwrap();
    assert_ne!(after_register, after_login);
}

#[tokio::test]
async fn wrong_password_and_unknown_email_are_indistinguishable() {
    let repo = Arc::new(InMemoryPatientRepo::new());
    let service = support::patient_service(repo);
    seed_patient(&service).await;

    let wrong_password = service
        .login(LoginPatientCommand {
            email: "alex@example.com".into(),
            password: "wrong9pass".into(),
        })
        .await
        .unwrap_err();

    let unknown_email = service
        .login(LoginPatientCommand {
            email: "nobody@example.com".into(),
            password: "sunny1day".into(),
        })
        .await
        .unwrap_err();

    let messages: Vec<String> = [wrong_password, unknown_email]
        .into_iter()
        .map(|err| match err {
            ApplicationError::Unauthorized(msg) => msg,
            other => panic!("expected unauthorized, got {other:?}"),
        })
        .collect();

    assert_eq!(messages[0], INVALID_CREDENTIALS);
    assert_eq!(messages[0], messages[1]);
}

#[tokio::test]
async fn logout_clears_the_refresh_token() {
    let repo = Arc::new(InMemoryPatientRepo::new());
    let service = support::patient_service(Arc::clone(&repo));
    let id = seed_patient(&service).await;

    assert!(repo.get(id).unwrap().refresh_token.is_some());

    service.logout(&support::patient_actor(id)).await.unwrap();

    assert!(repo.get(id).unwrap().refresh_token.is_none());
}

#[tokio::test]
async fn logout_rejects_a_doctor_session() {
    let repo = Arc::new(InMemoryPatientRepo::new());
    let service = support::patient_service(Arc::clone(&repo));
    let id = seed_patient(&service).await;

    let err = service
        .logout(&support::doctor_actor(id))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Forbidden(_)));
    assert!(repo.get(id).unwrap().refresh_token.is_some());
}

#[tokio::test]
async fn doctor_registration_trims_specializations_and_opens_session() {
    let repo = Arc::new(InMemoryDoctorRepo::new());
    let service = support::doctor_service(Arc::clone(&repo));

    let result = service.register(doctor_register_command()).await.unwrap();

    assert_eq!(result.doctor.specializations, vec!["cardiology".to_string()]);
    assert!(!result.token.token.is_empty());
    assert!(repo.get(result.doctor.id).unwrap().refresh_token.is_some());
}

#[tokio::test]
async fn doctor_registration_requires_license_and_uploads() {
    let repo = Arc::new(InMemoryDoctorRepo::new());
    let service = support::doctor_service(repo);

    let mut missing_license = doctor_register_command();
    missing_license.license = "  ".into();
    assert!(matches!(
        service.register(missing_license).await.unwrap_err(),
        ApplicationError::Validation(_)
    ));

    let mut missing_certificate = doctor_register_command();
    missing_certificate.certificate_path = String::new();
    assert!(matches!(
        service.register(missing_certificate).await.unwrap_err(),
        ApplicationError::Validation(_)
    ));
}

#[tokio::test]
async fn doctor_login_and_logout_round_trip() {
    let repo = Arc::new(InMemoryDoctorRepo::new());
    let service = support::doctor_service(Arc::clone(&repo));
    let id = service
        .register(doctor_register_command())
        .await
        .unwrap()
        .doctor
        .id;

    let login = service
        .login(LoginDoctorCommand {
            email: "mori@clinic.test".into(),
            password: "stetho2scope".into(),
        })
        .await
        .unwrap();
    assert_eq!(login.user.id, id);

    service.logout(&support::doctor_actor(id)).await.unwrap();
    assert!(repo.get(id).unwrap().refresh_token.is_none());
}
