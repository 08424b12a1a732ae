//! Messaging Directory server
//!
//! A REST API over a single in-memory messaging service.

use messaging_directory::api::{self, ApiState};
use messaging_directory::config::Config;
use messaging_directory::messaging::MessagingService;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address: {}", e))?;

    let app = api::router(ApiState::new(MessagingService::new(), config));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, version = env!("CARGO_PKG_VERSION"), "Messaging directory listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve once the process is asked to stop
///
/// Listens for Ctrl+C everywhere and SIGTERM on unix. A listener that cannot
/// be installed is logged and never fires, leaving the other one in charge.
async fn wait_for_shutdown() {
    let interrupt = async {
        match signal::ctrl_c().await {
            Ok(()) => "interrupt",
            Err(e) => {
                warn!("Ctrl+C listener unavailable: {}", e);
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                "terminate"
            }
            Err(e) => {
                warn!("SIGTERM listener unavailable: {}", e);
                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&str>();

    let reason = tokio::select! {
        reason = interrupt => reason,
        reason = terminate => reason,
    };
    info!(signal = reason, "Shutting down");
}
