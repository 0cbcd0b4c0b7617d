//! Server entry point.

use tokio::signal;
use welcome_api::config::Config;
use welcome_api::error::ServerError;
use welcome_api::telemetry::{self, STARTUP_TARGET};

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = Config::from_env();

    // 1. Initialize tracing
    telemetry::init(&config.log_level);

    // 2. Bind; a failure here is the only fatal startup condition
    let listener = match welcome_api::bind(&config).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, "could not start server");
            return Err(err);
        }
    };
    tracing::info!(target: STARTUP_TARGET, "Server is running on {}", config.public_url());

    // 3. Serve until signalled
    welcome_api::serve(listener, shutdown_signal()).await?;

    tracing::info!("server shut down gracefully");
    Ok(())
}
