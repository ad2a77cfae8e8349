//! Yahoo Finance quotes via the RapidAPI gateway.
//!
//! Uses the yahoo-finance15 batch quote endpoint:
//! `GET /api/v1/markets/stock/quotes?ticker=SYM1,SYM2,...`
//!
//! One request fetches the whole portfolio's ticker set. Access is gated by
//! a RapidAPI key sent in the `x-rapidapi-key` header.
//! API documentation: https://rapidapi.com/sparior/api/yahoo-finance15

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::Quote;
use crate::provider::QuoteProvider;

const BASE_URL: &str = "https://yahoo-finance15.p.rapidapi.com";
const API_HOST: &str = "yahoo-finance15.p.rapidapi.com";
const PROVIDER_ID: &str = "RAPIDAPI_YAHOO";
const CREDENTIAL_KEY: &str = "RAPIDAPI_KEY";

// ============================================================================
// API Response Structures
// ============================================================================

/// Envelope around the quotes payload
#[derive(Debug, Deserialize)]
struct QuotesResponse {
    /// Quote records, one per resolved ticker
    #[serde(default)]
    body: Vec<QuoteItem>,
}

/// One quote record as the endpoint returns it.
///
/// Every field is optional; the endpoint drops fields it has no data for
/// (e.g. `trailingPE` for unprofitable companies).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteItem {
    symbol: Option<String>,
    regular_market_price: Option<f64>,
    #[serde(rename = "trailingPE")]
    trailing_pe: Option<f64>,
    eps_trailing_twelve_months: Option<f64>,
    exchange: Option<String>,
    regular_market_change: Option<f64>,
    regular_market_change_percent: Option<f64>,
    // Note: the endpoint returns many more fields (marketCap, dayHigh, ...)
    // that the tracker does not consume
}

impl QuoteItem {
    fn into_quote(self) -> Quote {
        Quote {
            ticker: self.symbol.unwrap_or_default(),
            cmp: decimal_or_zero(self.regular_market_price),
            trailing_pe: decimal_or_zero(self.trailing_pe),
            eps_trailing_twelve_months: decimal_or_zero(self.eps_trailing_twelve_months),
            exchange: self.exchange.unwrap_or_default(),
            change: decimal_or_zero(self.regular_market_change),
            change_percent: decimal_or_zero(self.regular_market_change_percent),
        }
    }
}

fn decimal_or_zero(value: Option<f64>) -> Decimal {
    value.and_then(Decimal::from_f64).unwrap_or(Decimal::ZERO)
}

// ============================================================================
// RapidApiYahooProvider
// ============================================================================

/// Yahoo Finance quote provider behind the RapidAPI gateway.
///
/// Constructed with an optional credential: a missing key is a
/// configuration fault of this collaborator and surfaces as
/// [`MarketDataError::MissingCredential`] on every call, so the rest of the
/// system keeps running against an empty quote list.
pub struct RapidApiYahooProvider {
    client: Client,
    api_key: Option<String>,
}

impl RapidApiYahooProvider {
    /// Create a new provider with the given RapidAPI key.
    pub fn new(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, api_key }
    }

    fn credential(&self) -> Result<&str, MarketDataError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| MarketDataError::MissingCredential {
                provider: PROVIDER_ID.to_string(),
                key: CREDENTIAL_KEY.to_string(),
            })
    }
}

#[async_trait]
impl QuoteProvider for RapidApiYahooProvider {
    async fn quotes(&self, tickers: &[String]) -> Result<Vec<Quote>, MarketDataError> {
        let api_key = self.credential()?;

        if tickers.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/api/v1/markets/stock/quotes", BASE_URL);

        debug!("RapidAPI Yahoo request for {} tickers", tickers.len());

        let response = self
            .client
            .get(&url)
            .header("x-rapidapi-key", api_key)
            .header("x-rapidapi-host", API_HOST)
            .query(&[("ticker", tickers.join(","))])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MarketDataError::Timeout {
                        provider: PROVIDER_ID.to_string(),
                    }
                } else {
                    MarketDataError::ProviderError {
                        provider: PROVIDER_ID.to_string(),
                        message: format!("Request failed: {}", e),
                    }
                }
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: "Invalid or unauthorized API key".to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {}", status, body),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to read response: {}", e),
            })?;

        let parsed: QuotesResponse =
            serde_json::from_str(&text).map_err(|e| MarketDataError::InvalidResponse {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse quote response: {}", e),
            })?;

        Ok(parsed.body.into_iter().map(QuoteItem::into_quote).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_batch_quote_payload() {
        let payload = r#"{
            "meta": { "version": "v1.0", "status": 200 },
            "body": [
                {
                    "symbol": "HDB",
                    "regularMarketPrice": 64.37,
                    "trailingPE": 21.97,
                    "epsTrailingTwelveMonths": 2.93,
                    "exchange": "NYQ",
                    "regularMarketChange": -0.42,
                    "regularMarketChangePercent": -0.648
                },
                {
                    "symbol": "AFFLE.NS",
                    "regularMarketPrice": 1648.5,
                    "exchange": "NSI"
                }
            ]
        }"#;

        let parsed: QuotesResponse = serde_json::from_str(payload).unwrap();
        let quotes: Vec<Quote> = parsed.body.into_iter().map(QuoteItem::into_quote).collect();

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].ticker, "HDB");
        assert_eq!(quotes[0].cmp, dec!(64.37));
        assert_eq!(quotes[0].trailing_pe, dec!(21.97));
        assert_eq!(quotes[0].eps_trailing_twelve_months, dec!(2.93));
        assert_eq!(quotes[0].exchange, "NYQ");
        assert_eq!(quotes[0].change, dec!(-0.42));

        // Missing fields default to zero / empty
        assert_eq!(quotes[1].ticker, "AFFLE.NS");
        assert_eq!(quotes[1].cmp, dec!(1648.5));
        assert_eq!(quotes[1].trailing_pe, Decimal::ZERO);
        assert_eq!(quotes[1].eps_trailing_twelve_months, Decimal::ZERO);
        assert_eq!(quotes[1].change_percent, Decimal::ZERO);
    }

    #[test]
    fn parses_empty_body() {
        let parsed: QuotesResponse = serde_json::from_str(r#"{ "body": [] }"#).unwrap();
        assert!(parsed.body.is_empty());

        // A payload with no body key at all is also tolerated
        let parsed: QuotesResponse = serde_json::from_str(r#"{ "meta": {} }"#).unwrap();
        assert!(parsed.body.is_empty());
    }

    #[tokio::test]
    async fn missing_credential_fails_fast() {
        let provider = RapidApiYahooProvider::new(None);
        let err = provider
            .quotes(&["HDB".to_string()])
            .await
            .expect_err("should fail without a key");
        assert!(matches!(err, MarketDataError::MissingCredential { .. }));

        // An empty string is treated the same as an unset key
        let provider = RapidApiYahooProvider::new(Some(String::new()));
        let err = provider.quotes(&["HDB".to_string()]).await.unwrap_err();
        assert!(matches!(err, MarketDataError::MissingCredential { .. }));
    }

    #[tokio::test]
    async fn empty_ticker_set_skips_the_request() {
        let provider = RapidApiYahooProvider::new(Some("test-key".to_string()));
        let quotes = provider.quotes(&[]).await.unwrap();
        assert!(quotes.is_empty());
    }
}
