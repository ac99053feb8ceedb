//! # BYOV API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

#[cfg(feature = "scheduler")]
mod background;
mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        reconcile_on_read = config.feed.reconcile_on_read,
        "Starting BYOV API server"
    );

    let state = AppState::new(&config).await;

    #[cfg(feature = "scheduler")]
    let scheduler = start_scheduler(&config, &state).await;

    let app_state = web::Data::new(state);
    let result = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(app_state.clone())
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await;

    #[cfg(feature = "scheduler")]
    {
        if let Some(mut scheduler) = scheduler {
            if let Err(e) = scheduler.shutdown().await {
                tracing::warn!(error = %e, "Scheduler did not stop cleanly");
            }
        }
    }

    result
}

/// Start background jobs. Scheduler failures are logged and never stop the server.
#[cfg(feature = "scheduler")]
async fn start_scheduler(config: &AppConfig, state: &AppState) -> Option<background::Scheduler> {
    if !config.scheduler.enabled {
        tracing::info!("Scheduler disabled");
        return None;
    }

    let scheduler = match background::Scheduler::new(config.scheduler.clone()).await {
        Ok(scheduler) => scheduler,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create scheduler");
            return None;
        }
    };

    if let Err(e) = background::register_jobs(&scheduler, state).await {
        tracing::error!(error = %e, "Failed to register background jobs");
        return None;
    }

    if let Err(e) = scheduler.start().await {
        tracing::error!(error = %e, "Failed to start scheduler");
        return None;
    }

    Some(scheduler)
}
