mod health;
mod portfolio;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::PortfolioState;

pub fn app_router(state: Arc<PortfolioState>) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .route("/portfolio", get(portfolio::get_portfolio))
                .route("/portfolio/allocations", get(portfolio::get_allocations))
                .route("/health", get(health::get_health)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
