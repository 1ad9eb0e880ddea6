//! # Ventas API Server
//!
//! Entry point: load config, open the ledger, serve the JSON API.
//!
//! ## Startup Sequence
//! ```text
//! env vars ──► ServerConfig ──► Database (pool + migrations)
//!                                    │
//!                                    ▼
//!                         router(AppState) ──► axum::serve
//!                                                  │
//!                               SIGINT/SIGTERM ────┘ graceful shutdown
//! ```

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ventas_db::{Database, DbConfig};
use ventas_server::config::ServerConfig;
use ventas_server::{router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting ventas API server");

    let config = ServerConfig::load()?;
    info!(
        port = config.port,
        db_path = %config.database_path,
        timezone = %config.timezone,
        "Configuration loaded"
    );

    let db = Database::new(DbConfig::new(&config.database_path)).await?;

    let state = AppState {
        db: db.clone(),
        zone: config.timezone,
    };
    let app = router(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,ventas_server=debug,ventas_db=debug,ventas_core=debug,sqlx=warn")
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
