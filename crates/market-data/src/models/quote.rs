use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Live market data for one ticker symbol.
///
/// Every numeric field defaults to zero when the provider omits it, so a
/// `Quote` is always fully populated. Serialized field names match the
/// dashboard wire format (`trailingPE`, `epsTrailingTwelveMonths`, ...).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Ticker symbol as the provider reports it (e.g. "HDB", "AFFLE.NS")
    pub ticker: String,

    /// Current market price per share
    pub cmp: Decimal,

    /// Trailing price-to-earnings ratio
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Decimal,

    /// Earnings per share, trailing twelve months
    pub eps_trailing_twelve_months: Decimal,

    /// Exchange the quote was sourced from
    pub exchange: String,

    /// Absolute price change for the session
    pub change: Decimal,

    /// Percent price change for the session
    pub change_percent: Decimal,
}
