// src/presentation/http/controllers/doctors.rs
use crate::application::{
    commands::doctors::{LoginDoctorCommand, RegisterDoctorCommand},
    dto::{AuthTokenDto, DoctorDto},
    queries::doctors::GetDoctorQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub specializations: Vec<String>,
    pub license: String,
    pub fee: Option<i64>,
    pub certificate_path: String,
    pub profile_pic_path: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: AuthTokenDto,
    pub user: DoctorDto,
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<SessionResponse>)> {
    let command = RegisterDoctorCommand {
        full_name: payload.full_name,
        email: payload.email,
        password: payload.password,
        specializations: payload.specializations,
        license: payload.license,
        fee: payload.fee,
        certificate_path: payload.certificate_path,
        profile_pic_path: payload.profile_pic_path,
    };

    let result = state
        .services
        .doctor_commands
        .register(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            token: result.token,
            user: result.doctor,
        }),
    ))
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<SessionResponse>> {
    let command = LoginDoctorCommand {
        email: payload.email,
        password: payload.password,
    };

    let result = state
        .services
        .doctor_commands
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
        .doctor_commands
        .logout(&user)
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "logged_out" })))
}

pub async fn list_doctors(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<DoctorDto>>> {
    state
        .services
        .doctor_queries
        .list_doctors()
        .await
        .into_http()
        .map(Json)
}

pub async fn get_doctor(
    Extension(state): Extension<HttpState>,
    Path(doctor_id): Path<i64>,
) -> HttpResult<Json<DoctorDto>> {
    state
        .services
        .doctor_queries
        .get_doctor(GetDoctorQuery { doctor_id })
        .await
        .into_http()
        .map(Json)
}
