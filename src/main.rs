//! HTTP server binary for the Weekly Wage Engine.
//!
//! Reads the service configuration from `WAGE_ENGINE_CONFIG` (default
//! `./config/service.yaml`) and serves the calculation API.

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use weekly_wage_engine::api::{AppState, create_router};
use weekly_wage_engine::config::ConfigLoader;

const CONFIG_ENV_VAR: &str = "WAGE_ENGINE_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config/service.yaml";

/// Installs the global subscriber. `RUST_LOG` wins over the configured filter.
fn init_logging(default_filter: &str) -> Result<(), String> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| format!("Failed to set up logging: {}", e))
}

#[tokio::main]
async fn main() -> ExitCode {
    let config_path =
        std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let config = match ConfigLoader::load_or_default(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(config.log_filter()) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let bind_address = config.bind_address().to_string();
    info!(
        config_path = %config_path,
        engine = config.engine_name(),
        "Configuration loaded"
    );

    let listener = match tokio::net::TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(bind_address = %bind_address, error = %e, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };

    let router = create_router(AppState::new(config));
    info!(bind_address = %bind_address, "Weekly wage engine listening");

    if let Err(e) = axum::serve(listener, router).await {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
