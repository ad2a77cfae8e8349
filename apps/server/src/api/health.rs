use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::PortfolioState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: &'static str,
    pub holdings_count: usize,
    pub refreshed_at: DateTime<Utc>,
}

/// Liveness plus the age of the current snapshot.
pub async fn get_health(State(state): State<Arc<PortfolioState>>) -> Json<HealthStatus> {
    let snapshot = state.snapshot();
    Json(HealthStatus {
        status: "ok",
        holdings_count: snapshot.holdings.len(),
        refreshed_at: snapshot.refreshed_at,
    })
}
