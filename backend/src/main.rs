//! BMI Health Analyzer Backend
//!
//! Serves the BMI engine over HTTP: calculate, advice, legend and CSV export.
//! Settings come from `config/{RUST_ENV}.toml` and `BMI__*` variables.

use anyhow::{Context, Result};
use bmi_analyzer_backend::{config::AppConfig, routes, state::AppState};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEV_LOG_FILTER: &str = "bmi_analyzer_backend=debug,tower_http=debug";
const PROD_LOG_FILTER: &str = "bmi_analyzer_backend=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let production = AppConfig::is_production();
    init_tracing(production);

    let config = AppConfig::load().context("loading configuration")?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        production,
        advice_variant = ?config.engine.advice_variant,
        export_file = %config.export.filename,
        "BMI analyzer starting"
    );

    let addr = config.server.bind_address();
    let state = AppState::new(config, install_metrics_recorder());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(address = %addr, "Listening");

    axum::serve(listener, routes::create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("BMI analyzer stopped");
    Ok(())
}

/// Prometheus recorder for /metrics; the server still runs without one
fn install_metrics_recorder() -> Option<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| warn!(error = %e, "Metrics recorder unavailable, /metrics disabled"))
        .ok()
}

/// Pretty logs for development, JSON lines in production; RUST_LOG overrides
fn init_tracing(production: bool) {
    let default_filter = if production { PROD_LOG_FILTER } else { DEV_LOG_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());
    let registry = tracing_subscriber::registry().with(filter);

    if production {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    }
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Ctrl+C handler failed");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "SIGTERM handler failed");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Ctrl+C received, draining connections"),
        _ = terminate => info!("SIGTERM received, draining connections"),
    }
}
