//! Joins holdings with live quotes and computes the derived financial
//! fields. This is the enrichment pass at the heart of every refresh cycle.

use rust_decimal::Decimal;

use foliotrack_market_data::Quote;

use crate::errors::{Result, ValidationError};
use crate::holdings::{EnrichedHolding, Holding};

/// Enriches every holding with its matching quote and derived fields.
///
/// The output has the same length and order as `holdings`. For each holding
/// the first quote with an equal ticker (case-sensitive) is used; later
/// duplicates are ignored. Unmatched holdings are never dropped - their
/// quote-sourced fields default to zero and `exchange` falls back to the
/// holding's own.
///
/// Pure function: no I/O, no side effects. Fails only on a data-quality
/// fault (negative quantity or purchase price); a zero value is tolerated
/// and the percentage guard keeps the arithmetic total.
pub fn enrich(holdings: &[Holding], quotes: &[Quote]) -> Result<Vec<EnrichedHolding>> {
    holdings
        .iter()
        .map(|holding| enrich_one(holding, quotes))
        .collect()
}

fn enrich_one(holding: &Holding, quotes: &[Quote]) -> Result<EnrichedHolding> {
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

    let quote = quotes.iter().find(|q| q.ticker == holding.ticker);

    let qty = Decimal::from(holding.qty);
    let cmp = quote.map(|q| q.cmp).unwrap_or(Decimal::ZERO);

    let investment = holding.purchase_price * qty;
    let present_value = cmp * qty;
    let gain = cmp - holding.purchase_price;
    let total_gain = present_value - investment;

    let (gain_percent, total_gain_percent) = if investment.is_zero() {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        (
            gain / investment * Decimal::ONE_HUNDRED,
            total_gain / investment * Decimal::ONE_HUNDRED,
        )
    };

    Ok(EnrichedHolding {
        ticker: holding.ticker.clone(),
        particular: holding.particular.clone(),
        sector: holding.sector.clone(),
        purchase_price: holding.purchase_price,
        qty: holding.qty,
        exchange: quote
            .map(|q| q.exchange.clone())
            .unwrap_or_else(|| holding.exchange.clone()),
        cmp,
        trailing_pe: quote.map(|q| q.trailing_pe).unwrap_or(Decimal::ZERO),
        eps_trailing_twelve_months: quote
            .map(|q| q.eps_trailing_twelve_months)
            .unwrap_or(Decimal::ZERO),
        change: quote.map(|q| q.change).unwrap_or(Decimal::ZERO),
        change_percent: quote.map(|q| q.change_percent).unwrap_or(Decimal::ZERO),
        investment,
        present_value,
        gain,
        total_gain,
        gain_percent,
        total_gain_percent,
    })
}
