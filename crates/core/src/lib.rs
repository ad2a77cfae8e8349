//! Foliotrack Core Crate
//!
//! Domain logic for the portfolio tracker: the static holdings store, the
//! enrichment pass that joins holdings with live quotes, and the allocation
//! roll-up that feeds summary cards and sector charts.
//!
//! Everything here is pure computation over in-memory data. Fetching quotes
//! is the market-data crate's job; serving the result is the server's. All
//! derived entities ([`holdings::EnrichedHolding`],
//! [`allocation::PortfolioAllocations`]) are recomputed wholesale each
//! refresh cycle and never mutated in place.

pub mod allocation;
pub mod errors;
pub mod holdings;

pub use errors::{Error, Result};
