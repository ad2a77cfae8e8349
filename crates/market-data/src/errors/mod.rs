//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching quotes.
///
/// Faults here belong to the provider boundary: callers absorb them (keep
/// the previous state, enrich against an empty quote list) rather than
/// letting them fail a whole refresh cycle.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider credential is not configured.
    /// Fatal for this collaborator only - the core cycle keeps running
    /// with an empty quote list.
    #[error("Missing credential for {provider}: {key} is not set")]
    MissingCredential {
        /// The provider that requires the credential
        provider: String,
        /// The environment key that was expected
        key: String,
    },

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred (network failure, non-success
    /// HTTP status, rejected credential).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned a payload that could not be parsed.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        /// The provider that returned the payload
        provider: String,
        /// What failed while parsing it
        message: String,
    },
}
