// src/presentation/http/controllers/patients.rs
use crate::application::{
    commands::patients::{
        LoginPatientCommand, RegisterPatientCommand, UpdatePatientProfileCommand,
    },
    dto::{AuthTokenDto, PatientDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: AuthTokenDto,
    pub user: PatientDto,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<SessionResponse>)> {
    let command = RegisterPatientCommand {
        name: payload.name,
        email: payload.email,
        password: payload.password,
    };

    let result = state
        .services
        .patient_commands
        .register(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            token: result.token,
            user: result.patient,
        }),
    ))
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<SessionResponse>> {
    let command = LoginPatientCommand {
        email: payload.email,
        password: payload.password,
    };

    let result = state
        .services
        .patient_commands
        .login(command)
        .await
        .into_http()?;

    Ok(Json(SessionResponse {
        token: result.token,
        user: result.user,
    }))
}

pub async fn logout(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .patient_commands
        .logout(&user)
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "logged_out" })))
}

pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<UpdateProfileRequest>,
) -> HttpResult<Json<PatientDto>> {
    let command = UpdatePatientProfileCommand {
        name: payload.name,
        current_password: payload.current_password,
        new_password: payload.new_password,
    };

    state
        .services
        .patient_commands
        .update_profile(&user, command)
        .await
        .into_http()
        .map(Json)
}
