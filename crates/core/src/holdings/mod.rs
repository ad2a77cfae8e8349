//! Holdings: the static portfolio list and its per-cycle enrichment.

mod enrichment;
mod holdings_model;
mod holdings_store;

#[cfg(test)]
mod enrichment_tests;

pub use enrichment::enrich;
pub use holdings_model::{EnrichedHolding, Holding};
pub use holdings_store::{load_holdings, tickers};
