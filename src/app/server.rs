use tokio::net::TcpListener;
use tokio::signal;

use super::routes;
use super::state::AppState;
use crate::adapters::BisnodeClient;
use crate::config::GatewayConfig;
use crate::utils::error::Result;

/// Binds the configured address and serves until Ctrl+C or SIGTERM.
pub async fn serve(config: &GatewayConfig) -> Result<()> {
    let addr = config.bind_address()?;
    let client = BisnodeClient::new(&config.bisnode)?;
    tracing::info!("forwarding searches to {}", client.base_url());

    let app = routes::app(AppState::from_client(client));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server exited properly");
    Ok(())
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutting down server...");
}
