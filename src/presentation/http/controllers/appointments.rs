// src/presentation/http/controllers/appointments.rs
use crate::application::{
    commands::appointments::BookAppointmentCommand,
    dto::AppointmentDto,
    queries::appointments::AppointmentsByDoctorQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    pub doctor_id: i64,
    pub date: String,
    pub time_slot: String,
}

pub async fn book(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<BookingRequest>,
) -> HttpResult<(StatusCode, Json<AppointmentDto>)> {
    let command = BookAppointmentCommand {
        doctor_id: payload.doctor_id,
        date: payload.date,
        time_slot: payload.time_slot,
    };

    let appointment = state
        .services
        .appointment_commands
        .book(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

pub async fn by_doctor(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(doctor_id): Path<i64>,
) -> HttpResult<Json<Vec<AppointmentDto>>> {
    state
        .services
        .appointment_queries
        .by_doctor(AppointmentsByDoctorQuery { doctor_id })
        .await
        .into_http()
        .map(Json)
}

pub async fn for_patient(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<AppointmentDto>>> {
    state
        .services
        .appointment_queries
        .for_patient(&user)
        .await
        .into_http()
        .map(Json)
}
