pub mod analytics;
pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod export;
pub mod models;
pub mod scoring;
pub mod services;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
pub use config::Config;
use metrics_exporter_prometheus::PrometheusHandle;
use state::SharedState;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let command = Cli::parse().command.unwrap_or(Commands::Serve);

    // `init` must work before a valid config exists.
    if let Commands::Init { path } = &command {
        return cli::cmd_init(path.clone());
    }

    let config = Config::load()?;
    config.validate()?;

    init_tracing(&config);

    match command {
        Commands::Serve => {
            let prometheus_handle = if config.observability.metrics_enabled {
                use metrics_exporter_prometheus::PrometheusBuilder;
                let handle = PrometheusBuilder::new()
                    .install_recorder()
                    .context("Failed to install Prometheus recorder")?;
                info!("Prometheus metrics recorder initialized");
                Some(handle)
            } else {
                None
            };
            serve(config, prometheus_handle).await
        }
        Commands::Init { .. } => Ok(()),
        Commands::Score { file } => cli::cmd_score(&file),
        Commands::Export { id, out } => cli::cmd_export(&config, id, out).await,
        Commands::Overview => cli::cmd_overview(&config).await,
    }
}

fn init_tracing(config: &Config) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.general.log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn serve(config: Config, prometheus_handle: Option<PrometheusHandle>) -> anyhow::Result<()> {
    if !config.server.enabled {
        warn!("Server is disabled in config, nothing to do");
        return Ok(());
    }

    if config.auth.gateway_key.is_none() {
        warn!("No gateway key configured, logins will be rejected");
    }

    let port = config.server.port;
    let shared = Arc::new(SharedState::new(config).await?);
    let state = api::create_app_state(shared, prometheus_handle);
    let app = api::router(state).await;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("SCL-90 service listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
