//! Owned state for the fetch-enrich-aggregate cycle.
//!
//! One [`PortfolioState`] holds the static holdings list, the quote
//! provider, and the latest snapshot. Each cycle computes a fresh snapshot
//! and replaces the previous one atomically; a failed fetch retains the
//! previous snapshot, so consumers always observe the last successfully
//! computed state.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::warn;

use foliotrack_core::allocation::{self, PortfolioAllocations};
use foliotrack_core::holdings::{self, EnrichedHolding, Holding};
use foliotrack_market_data::{Quote, QuoteProvider};

/// One complete result of a fetch-enrich-aggregate cycle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub holdings: Vec<EnrichedHolding>,
    pub allocations: PortfolioAllocations,
    pub refreshed_at: DateTime<Utc>,
}

pub struct PortfolioState {
    holdings: Vec<Holding>,
    tickers: Vec<String>,
    provider: Arc<dyn QuoteProvider>,
    snapshot: RwLock<Arc<PortfolioSnapshot>>,
    /// Serializes cycles: a slow fetch never overlaps or races a later one.
    refresh_gate: Mutex<()>,
}

impl PortfolioState {
    /// Builds the state with an initial snapshot computed against an empty
    /// quote list, so a well-formed snapshot exists before the first fetch.
    pub fn new(
        holdings: Vec<Holding>,
        provider: Arc<dyn QuoteProvider>,
    ) -> foliotrack_core::Result<Self> {
        let tickers = holdings::tickers(&holdings);
        let initial = build_snapshot(&holdings, &[])?;
        Ok(Self {
            holdings,
            tickers,
            provider,
            snapshot: RwLock::new(Arc::new(initial)),
            refresh_gate: Mutex::new(()),
        })
    }

    /// The latest successfully computed snapshot.
    pub fn snapshot(&self) -> Arc<PortfolioSnapshot> {
        self.snapshot.read().unwrap().clone()
    }

    /// Runs one fetch-enrich-aggregate cycle.
    ///
    /// Replace-on-success, retain-on-failure: a provider fault is logged
    /// and absorbed here, and the previous snapshot is returned unchanged.
    pub async fn refresh(&self) -> foliotrack_core::Result<Arc<PortfolioSnapshot>> {
        let _gate = self.refresh_gate.lock().await;

        let quotes = match self.provider.quotes(&self.tickers).await {
            Ok(quotes) => quotes,
            Err(e) => {
                warn!("Quote fetch failed, keeping previous snapshot: {}", e);
                return Ok(self.snapshot());
            }
        };

        let next = Arc::new(build_snapshot(&self.holdings, &quotes)?);
        *self.snapshot.write().unwrap() = next.clone();
        Ok(next)
    }
}

fn build_snapshot(
    holdings: &[Holding],
    quotes: &[Quote],
) -> foliotrack_core::Result<PortfolioSnapshot> {
    let enriched = holdings::enrich(holdings, quotes)?;
    let allocations = allocation::allocate(&enriched);
    Ok(PortfolioSnapshot {
        holdings: enriched,
        allocations,
        refreshed_at: Utc::now(),
    })
}
