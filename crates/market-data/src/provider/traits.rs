use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::Quote;

/// A source of live quotes for a fixed set of ticker symbols.
///
/// One call covers the whole set. Partial results are legal: tickers the
/// provider does not know are simply absent from the output and are never
/// substituted with placeholder records. A wholly failed fetch returns an
/// error instead of an empty list so callers can distinguish "no data" from
/// "fetch failed" and retain their previous state.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch current quotes for the given tickers.
    async fn quotes(&self, tickers: &[String]) -> Result<Vec<Quote>, MarketDataError>;
}
