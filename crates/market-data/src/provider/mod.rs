//! Quote provider abstractions and implementations.
//!
//! Providers receive the full ticker set for the portfolio and fetch it in
//! one batched request. The trait is object-safe so the server can inject
//! any provider (or a test double) behind `Arc<dyn QuoteProvider>`.

mod traits;

pub mod rapidapi_yahoo;

pub use rapidapi_yahoo::RapidApiYahooProvider;
pub use traits::QuoteProvider;
