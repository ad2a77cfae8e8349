//! Background scheduler for the periodic quote refresh.
//!
//! Runs the fetch-enrich-aggregate cycle on a fixed interval (15 seconds by
//! default). Cycles are serialized inside `PortfolioState::refresh`, so a
//! tick that fires while a cycle is still running simply waits its turn.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{info, warn};

use crate::state::PortfolioState;

/// Starts the recurring refresh. The returned handle is aborted on shutdown
/// so no timer outlives its consumers.
pub fn start_refresh_scheduler(state: Arc<PortfolioState>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Quote refresh scheduler started ({}s interval)",
            every.as_secs()
        );

        let mut tick = interval(every);
        // The first tick fires immediately; the startup snapshot already
        // covers that window, so consume it before looping.
        tick.tick().await;

        loop {
            tick.tick().await;
            if let Err(e) = state.refresh().await {
                warn!("Scheduled refresh failed: {}", e);
            }
        }
    })
}
