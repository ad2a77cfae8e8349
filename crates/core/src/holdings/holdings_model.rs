use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single owned position in the static portfolio list.
///
/// Sourced from the JSON holdings store at startup and read-only from then
/// on. Field names on the wire are camelCase (`purchasePrice`, ...).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Ticker symbol used to match live quotes (case-sensitive)
    pub ticker: String,
    /// Display name shown in the dashboard table
    pub particular: String,
    /// Sector the position is grouped under for allocation charts
    pub sector: String,
    /// Price per share paid at purchase
    pub purchase_price: Decimal,
    /// Number of shares held
    pub qty: i64,
    /// Exchange the position was bought on; also the fallback when a quote
    /// carries no exchange of its own
    pub exchange: String,
}

/// A holding joined with its live quote plus the derived financial fields.
///
/// Rebuilt wholesale every refresh cycle - never mutated in place. When no
/// quote matched, the quote-sourced fields are zero and `exchange` falls
/// back to the holding's own.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedHolding {
    // Holding fields
    pub ticker: String,
    pub particular: String,
    pub sector: String,
    pub purchase_price: Decimal,
    pub qty: i64,
    pub exchange: String,

    // Quote fields (zero defaults when unmatched)
    pub cmp: Decimal,
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Decimal,
    pub eps_trailing_twelve_months: Decimal,
    pub change: Decimal,
    pub change_percent: Decimal,

    // Derived fields
    /// purchase_price * qty
    pub investment: Decimal,
    /// cmp * qty
    pub present_value: Decimal,
    /// Per-share gain: cmp - purchase_price
    pub gain: Decimal,
    /// present_value - investment, always exactly
    pub total_gain: Decimal,
    /// (gain / investment) * 100, zero when investment is zero
    pub gain_percent: Decimal,
    /// (total_gain / investment) * 100, zero when investment is zero
    pub total_gain_percent: Decimal,
}
