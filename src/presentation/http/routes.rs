// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{appointments, doctors, patients, stories};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method},
    routing::{delete, get, post, put},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allow_origin(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/patient/register", post(patients::register))
        .route("/api/v1/patient/login", post(patients::login))
        .route("/api/v1/patient/logout", post(patients::logout))
        .route(
            "/api/v1/patient/update-profile",
            put(patients::update_profile),
        )
        .route("/api/v1/patient/doctor-booking", post(appointments::book))
        .route("/api/v1/patient/upload-story", post(stories::upload_story))
        .route("/api/v1/patient/my-stories", get(stories::my_stories))
        .route("/api/v1/patient/all-stories", get(stories::all_stories))
        .route(
            "/api/v1/patient/story/{id}",
            put(stories::update_story).delete(stories::delete_story),
        )
        .route("/api/v1/doctor/register", post(doctors::register))
        .route("/api/v1/doctor/login", post(doctors::login))
        .route("/api/v1/doctor/logout", post(doctors::logout))
        .route("/api/v1/doctor/all-doctor", get(doctors::list_doctors))
        .route(
            "/api/v1/doctor/get-doctor/{doctor_id}",
            get(doctors::get_doctor),
        )
        .route(
            "/api/v1/doctor/comment/{story_id}",
            post(stories::add_comment),
        )
        .route(
            "/api/v1/doctor/edit-comment/{story_id}/{comment_id}",
            put(stories::edit_comment),
        )
        .route(
            "/api/v1/doctor/delete-comment/{story_id}/{comment_id}",
            delete(stories::delete_comment),
        )
        .route(
            "/api/v1/appointment/by-doctor/{doctor_id}",
            get(appointments::by_doctor),
        )
        .route("/api/v1/appointment/patient", get(appointments::for_patient))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

fn allow_origin(origins: &[String]) -> AllowOrigin {
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return AllowOrigin::any();
    }

    let values: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    if values.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(values)
    }
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
