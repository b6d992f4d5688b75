pub mod handlers;
mod ui;

use crate::{classifier, config::Config, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Builds the application router around the given state. Split out from
/// `run` so integration tests can drive it without a listener.
pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/", get(ui::serve_index))
        .route("/static/app.js", get(ui::serve_app_js))
        .route(
            "/classify",
            post(handlers::classify).fallback(handlers::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Select the classifier adapter from deployment configuration
    let classifier = classifier::build(&config.classifier)?;

    let app_state = handlers::AppState { classifier };
    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
