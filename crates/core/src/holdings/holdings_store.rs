//! Loads the static holdings list from its JSON store.

use std::path::Path;

use log::warn;
use rust_decimal::Decimal;

use crate::errors::{Error, Result, ValidationError};
use crate::holdings::Holding;

/// Loads and validates the holdings list from a JSON file.
///
/// The store is an ordered JSON array of holding records; order is
/// preserved all the way to the enriched output. Loading fails on a
/// negative quantity or purchase price (data-quality fault, named per
/// ticker); zero values are tolerated with a warning since the percentage
/// guard keeps them well-defined downstream.
pub fn load_holdings(path: impl AsRef<Path>) -> Result<Vec<Holding>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| Error::StoreIo(format!("{}: {}", path.display(), e)))?;
    let holdings: Vec<Holding> = serde_json::from_str(&raw)
        .map_err(|e| Error::StoreIo(format!("{}: {}", path.display(), e)))?;
    validate(&holdings)?;
    Ok(holdings)
}

/// Distinct tickers in first-seen order - the fixed set fetched per cycle.
pub fn tickers(holdings: &[Holding]) -> Vec<String> {
    let mut seen = Vec::with_capacity(holdings.len());
    for holding in holdings {
        if !seen.contains(&holding.ticker) {
            seen.push(holding.ticker.clone());
        }
    }
    seen
}

fn validate(holdings: &[Holding]) -> Result<()> {
    for holding in holdings {
        if holding.qty < 0 {
            return Err(ValidationError::NegativeQuantity {
                ticker: holding.ticker.clone(),
                qty: holding.qty,
            }
            .into());
        }
        if holding.purchase_price < Decimal::ZERO {
            return Err(ValidationError::NegativePurchasePrice {
                ticker: holding.ticker.clone(),
                price: holding.purchase_price,
            }
            .into());
        }
        if holding.qty == 0 || holding.purchase_price.is_zero() {
            warn!(
                "Holding '{}' has a zero quantity or purchase price; its percentages will read as zero",
                holding.ticker
            );
        }
    }
    Ok(())
}
