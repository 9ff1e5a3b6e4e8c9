use dotenvy::dotenv;
use gatekeeper::logging::init_tracing;
use gatekeeper::router::init_router;
use gatekeeper::state::init_app_state;
use gatekeeper_config::ServerConfig;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let server_config = ServerConfig::from_env();
    let state = init_app_state();

    if state.jwt_config.uses_insecure_default() {
        warn!("JWT_SECRET is not set; using the insecure built-in secret. Set JWT_SECRET before deploying.");
    }

    let app = init_router(state);

    let listener = TcpListener::bind(server_config.addr()).await?;
    info!("Secure server running on port {}", server_config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", err);
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
                warn!("Failed to listen for SIGTERM: {}", err);
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
