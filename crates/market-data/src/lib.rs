//! Foliotrack Market Data Crate
//!
//! Live quote fetching for the portfolio tracker.
//!
//! # Overview
//!
//! The tracker needs exactly one thing from the market: the current quote
//! for every ticker in the holdings list, fetched in a single batched
//! request per refresh cycle. This crate provides:
//!
//! - [`Quote`] - live market data for one ticker symbol
//! - [`QuoteProvider`] - the trait the enrichment pipeline consumes
//! - [`RapidApiYahooProvider`] - Yahoo Finance quotes via the RapidAPI gateway
//!
//! Providers may return partial results (tickers simply absent from the
//! output); callers are expected to fall back to defaults per holding.
//! A wholly failed fetch surfaces as a [`MarketDataError`], never as a
//! placeholder quote record.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::Quote;
pub use provider::{QuoteProvider, RapidApiYahooProvider};
