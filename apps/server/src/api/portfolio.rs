use std::sync::Arc;

use axum::{extract::State, Json};

use foliotrack_core::allocation::PortfolioAllocations;
use foliotrack_core::holdings::EnrichedHolding;

use crate::{error::ApiResult, state::PortfolioState};

/// Triggers a fetch-enrich cycle and returns the enriched holdings.
///
/// When the fetch fails the previous snapshot is served unchanged, so the
/// dashboard keeps displaying the last good data.
pub async fn get_portfolio(
    State(state): State<Arc<PortfolioState>>,
) -> ApiResult<Json<Vec<EnrichedHolding>>> {
    let snapshot = state.refresh().await?;
    Ok(Json(snapshot.holdings.clone()))
}

/// Sector buckets, the three chart series, and portfolio totals from the
/// latest snapshot.
pub async fn get_allocations(
    State(state): State<Arc<PortfolioState>>,
) -> ApiResult<Json<PortfolioAllocations>> {
    Ok(Json(state.snapshot().allocations.clone()))
}
