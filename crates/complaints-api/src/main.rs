//! Complaint intake API server entry point.

use std::sync::Arc;

use complaints_api::config::Settings;
use complaints_api::error::AppError;
use complaints_api::state::AppState;
use complaints_api::telemetry;
use complaints_core::clock::{Clock, MonotonicClock, SystemClock};
use complaints_core::id::RandomIdGenerator;
use complaints_kafka::KafkaBroker;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Any configuration problem ends the process before the listener binds.
    let settings = Settings::from_env()?;
    let tracer_provider = telemetry::init(settings.otlp_endpoint.as_deref())?;

    info!("Starting complaint intake API server");

    let broker = KafkaBroker::connect(&settings.kafka)?;

    let clock: Arc<dyn Clock> = Arc::new(MonotonicClock::new(SystemClock));
    let app_state = AppState::new(clock, Arc::new(RandomIdGenerator), Arc::new(broker));
    let app = complaints_api::app(app_state);

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("complaint intake API server shut down");
    telemetry::shutdown(tracer_provider);

    Ok(())
}

/// Waits for a SIGINT (Ctrl+C) or SIGTERM signal for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { info!("received SIGINT, initiating graceful shutdown"); }
        () = terminate => { info!("received SIGTERM, initiating graceful shutdown"); }
    }
}
