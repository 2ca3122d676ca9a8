mod model;
mod server;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use tokio::net::TcpListener;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    scheduler::cleanup,
    service::{mail::LogMailer, otp::OtpService},
    startup,
    state::{AppState, DefaultPasswords},
};

const DEFAULT_LOG_FILTER: &str = "resolveit=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // RUST_LOG may come from .env
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let (session_layer, session_store) = startup::connect_to_session(&db, &config).await?;
    startup::seed_default_accounts(&db, &config).await?;

    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let otp_service = OtpService::new(Duration::from_secs(config.otp_validity_minutes * 60));

    // Held for the lifetime of the server so the jobs keep running
    let _scheduler = cleanup::start_scheduler(otp_service.clone(), session_store).await?;

    let per_minute = config.rate_limit_per_minute;
    // Bucket of `per_minute` requests per client IP, refilled evenly over a minute
    let governor_config = GovernorConfigBuilder::default()
        .key_extractor(SmartIpKeyExtractor)
        .per_millisecond((60_000 / u64::from(per_minute.max(1))).max(1))
        .burst_size(per_minute)
        .finish()
        .ok_or(ConfigError::InvalidRateLimit(per_minute))?;

    let state = AppState::new(
        db,
        otp_service,
        Arc::new(LogMailer),
        config.upload_dir.clone(),
        DefaultPasswords {
            staff: config.default_staff_password.clone(),
            admin: config.default_admin_password.clone(),
        },
    );

    let app = server::router::router(config.max_upload_bytes)
        .with_state(state)
        .layer(session_layer)
        .layer(startup::setup_cors(&config))
        .layer(TraceLayer::new_for_http())
        .layer(GovernorLayer::new(Arc::new(governor_config)));

    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Received Ctrl+C, shutting down");
}
