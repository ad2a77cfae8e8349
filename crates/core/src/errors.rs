//! Core error types for the portfolio tracker.

use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for core computations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to load holdings store: {0}")]
    StoreIo(String),
}

/// Data-quality faults in holding records.
///
/// These are surfaced per holding rather than silently computed into a
/// misleading zero. Negative values are rejected; zero values are tolerated
/// (the divide-by-zero guard covers them) but logged at load time.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Holding '{ticker}' has a negative quantity: {qty}")]
    NegativeQuantity { ticker: String, qty: i64 },

    #[error("Holding '{ticker}' has a negative purchase price: {price}")]
    NegativePurchasePrice { ticker: String, price: Decimal },
}
