use std::sync::Arc;

use info_service::{AppState, Config, Result, create_router, setup_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    // Инициализация логирования
    setup_tracing();

    let config = Config::from_env();
    tracing::info!("Application version {}", config.app_version);

    let addr = config.socket_addr().map_err(|e| {
        tracing::error!("Invalid server address '{}': {}", config.server_addr, e);
        e
    })?;

    let app = create_router(Arc::new(AppState::new(config)));

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("Info service starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /       - Greeting");
    tracing::info!("  - GET /health - Health check");
    tracing::info!("  - GET /info   - Application and environment info");

    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        e
    })?;

    Ok(())
}
