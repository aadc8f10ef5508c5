use std::sync::Arc;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{info, warn};

use account_api::api::{RouterConfig, create_router_with_config};
use account_api::app::AppState;
use account_api::config::AppConfig;
use account_api::domain::AccountStorage;
use account_api::infra::{
    InMemoryAccountStorage, PostgresClient, PostgresConfig, init_metrics_handle, init_tracing,
};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenv().ok();

    let config = AppConfig::from_env().context("invalid configuration")?;
    init_tracing(config.log_format);

    let storage: Arc<dyn AccountStorage> = match &config.database_url {
        Some(database_url) => {
            let pg_config = PostgresConfig {
                max_connections: config.database_max_connections,
                ..PostgresConfig::default()
            };
            let client = PostgresClient::new(database_url, pg_config)
                .await
                .context("failed to connect to PostgreSQL")?;
            client
                .run_migrations()
                .await
                .context("failed to run migrations")?;
            Arc::new(client)
        }
        None => {
            warn!("DATABASE_URL not set, accounts are kept in memory and lost on exit");
            Arc::new(InMemoryAccountStorage::new())
        }
    };

    let mut app_state = AppState::new(storage);
    if config.metrics_enabled {
        match init_metrics_handle() {
            Some(handle) => app_state = app_state.with_metrics(handle),
            None => warn!("Metrics recorder could not be installed, /metrics disabled"),
        }
    }

    let router = create_router_with_config(Arc::new(app_state), &RouterConfig::from(&config));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(addr = %config.listen_addr, "JSON API server running");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
