use std::sync::Arc;

use anyhow::Result;
use problem_api_core::{ApiVariant, Environment};
use problem_api_http::{AppState, create_router};

pub(crate) async fn run(
    port: u16,
    host: String,
    variant: ApiVariant,
    environment: Environment,
) -> Result<()> {
    let state = Arc::new(AppState::new(variant, environment));
    let router = create_router(state);

    let addr = format!("{host}:{port}");
    tracing::info!(%variant, %environment, "Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
