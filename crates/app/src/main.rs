use std::{sync::Arc, time::Duration};

use engine::ExpenseService;
use migration::{Migrator, MigratorTrait};
use server::{AllowAll, Authenticator, ServerState, StaticToken};
use settings::Database;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "expense_tracker={level},server={level},engine={level},tower_http={level}",
            level = settings.app.level
        ))
        .init();

    let server_settings = settings.server;
    let db = match parse_database(&server_settings.database).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!("failed to initialize database: {err}");
            return Err(err);
        }
    };
    let service = ExpenseService::builder().database(db).build();

    let authenticator: Arc<dyn Authenticator> = match server_settings.auth_token {
        Some(token) => Arc::new(StaticToken::new(token)),
        None => {
            tracing::warn!("no auth token configured, every request is accepted");
            Arc::new(AllowAll)
        }
    };

    let addr = format!("{}:{}", server_settings.bind, server_settings.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener on {addr}: {err}");
            return Err(err.into());
        }
    };

    server::run_with_listener(
        ServerState::new(service, authenticator),
        Duration::from_secs(server_settings.request_timeout_secs),
        listener,
        shutdown_signal(),
    )
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn parse_database(
    config: &Database,
) -> Result<sea_orm::DatabaseConnection, Box<dyn std::error::Error + Send + Sync>> {
    let url = match config {
        Database::Memory => String::from("sqlite::memory:"),
        Database::Sqlite(path) => format!("sqlite:{}?mode=rwc", path),
    };

    let database = sea_orm::Database::connect(url).await?;
    Migrator::up(&database, None).await?;
    Ok(database)
}

/// Resolve on Ctrl-C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to listen for SIGTERM: {err}");
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

    tracing::info!("Shutdown requested, draining in-flight requests");
}
