pub mod chart;
pub mod hangman;
pub mod pages;

pub use chart::ChartState;
pub use hangman::HangmanState;

use crate::error::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Router for the gold chart viewer
pub fn chart_router(state: ChartState) -> Router {
    tracing::info!("Registering chart routes:");
    tracing::info!("  GET /?period=1y&interval=1d");
    tracing::info!("  GET /health");

    Router::new()
        .route("/", get(chart::index_handler))
        .route("/health", get(chart::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router for the hangman game
pub fn hangman_router(state: HangmanState) -> Router {
    tracing::info!("Registering hangman routes:");
    tracing::info!("  GET  /");
    tracing::info!("  POST /new");
    tracing::info!("  POST /guess");
    tracing::info!("  GET  /state");
    tracing::info!("  GET  /health");

    Router::new()
        .route("/", get(hangman::index_handler))
        .route("/new", post(hangman::new_game_handler))
        .route("/guess", post(hangman::guess_handler))
        .route("/state", get(hangman::state_handler))
        .route("/health", get(hangman::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and run until Ctrl-C
pub async fn serve(app: Router, host: &str, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
