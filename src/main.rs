// src/main.rs
use anyhow::Result;
use karte_core::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::ApplicationServices,
};
use karte_core::config::AppConfig;
use karte_core::domain::{
    appointment::AppointmentRepository,
    identity::{DoctorRepository, PatientRepository},
    story::StoryRepository,
};
use karte_core::infrastructure::{
    database,
    repositories::{
        PostgresAppointmentRepository, PostgresDoctorRepository, PostgresPatientRepository,
        PostgresStoryRepository,
    },
    security::{Argon2PasswordHasher, BiscuitTokenManager},
    time::SystemClock,
};
use karte_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let patient_repo: Arc<dyn PatientRepository> =
        Arc::new(PostgresPatientRepository::new(pool.clone()));
    let doctor_repo: Arc<dyn DoctorRepository> =
        Arc::new(PostgresDoctorRepository::new(pool.clone()));
    let story_repo: Arc<dyn StoryRepository> = Arc::new(PostgresStoryRepository::new(pool.clone()));
    let appointment_repo: Arc<dyn AppointmentRepository> =
        Arc::new(PostgresAppointmentRepository::new(pool.clone()));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let services = Arc::new(ApplicationServices::new(
        patient_repo,
        doctor_repo,
        story_repo,
        appointment_repo,
        password_hasher,
        token_manager,
        clock,
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
