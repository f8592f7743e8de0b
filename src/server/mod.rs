// HTTP server for the Dragon's Den API

mod handlers;

pub use handlers::create_router;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::dragons::PitchEvaluator;

/// Shared state behind every handler.
pub struct AppState {
    evaluator: PitchEvaluator,
}

impl AppState {
    pub fn new(evaluator: PitchEvaluator) -> Self {
        Self { evaluator }
    }

    pub fn evaluator(&self) -> &PitchEvaluator {
        &self.evaluator
    }
}

/// Serve the API on `bind_address` until the process is stopped.
pub async fn serve(state: AppState, bind_address: &str) -> Result<()> {
    let addr: SocketAddr = bind_address.parse()?;

    // Pitches are natural-language text; 1MB leaves plenty of headroom
    // while blocking oversized foreign payloads. The frontend is served
    // from a different origin, hence the permissive CORS layer.
    let app = create_router(Arc::new(state))
        .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("Dragon's Den server running on {}", addr);
    tracing::info!("API endpoint: http://{}/api/evaluate-pitch", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
