//! BMI Calculator Backend
//!
//! JSON API over the BMI engine and the body-type quiz classifier.
//!
//! ## Architecture
//!
//! - Routes: HTTP request handling and routing
//! - Services: Input validation and response assembly
//! - Shared crate: Pure calculation core

use anyhow::Result;
use bmi_calculator_backend::{config, routes, state::AppState};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        "Starting BMI Calculator Backend"
    );

    if let Err(e) = validate_config(&config) {
        error!("Configuration error: {}", e);
        return Err(e);
    }

    let addr = config.bind_address();

    // Create application state
    let state = AppState::new(config);

    // Build application
    let app = routes::create_router(state);

    // Start server
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "bmi_calculator_backend=info,tower_http=info".into()
        } else {
            "bmi_calculator_backend=debug,tower_http=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

/// Reject limits that would make every request fail
fn validate_config(config: &config::AppConfig) -> Result<()> {
    if config.http.request_timeout_secs == 0 {
        anyhow::bail!("http.request_timeout_secs must be greater than zero");
    }
    if config.http.body_limit_bytes == 0 {
        anyhow::bail!("http.body_limit_bytes must be greater than zero");
    }
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
