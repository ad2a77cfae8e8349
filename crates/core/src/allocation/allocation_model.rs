//! Allocation models for sector breakdown and portfolio totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holdings::EnrichedHolding;

/// Accumulated figures for one sector.
///
/// Per-field sums are associative and commutative, so buckets built over
/// chunks of the holdings list recombine via [`merge`](Self::merge) to the
/// same result as a single pass.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectorAllocation {
    pub sector: String,
    pub investment: Decimal,
    pub present_value: Decimal,
    pub total_gain: Decimal,
}

impl SectorAllocation {
    /// A zero-initialized bucket for a sector.
    pub fn zero(sector: &str) -> Self {
        Self {
            sector: sector.to_string(),
            investment: Decimal::ZERO,
            present_value: Decimal::ZERO,
            total_gain: Decimal::ZERO,
        }
    }

    /// Folds one enriched holding into this bucket.
    pub fn add(&mut self, holding: &EnrichedHolding) {
        self.investment += holding.investment;
        self.present_value += holding.present_value;
        self.total_gain += holding.total_gain;
    }

    /// Recombines a partial bucket built over another chunk.
    pub fn merge(&mut self, other: &SectorAllocation) {
        self.investment += other.investment;
        self.present_value += other.present_value;
        self.total_gain += other.total_gain;
    }
}

/// One (name, value) pair feeding a slice of a proportional chart.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    pub name: String,
    pub value: Decimal,
}

/// Portfolio-wide sums for the summary cards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioTotals {
    pub investment: Decimal,
    pub present_value: Decimal,
    /// present_value - investment, always exactly
    pub total_gain: Decimal,
    /// (total_gain / investment) * 100, zero when investment is zero
    pub total_gain_percent: Decimal,
}

impl PortfolioTotals {
    pub fn zero() -> Self {
        Self {
            investment: Decimal::ZERO,
            present_value: Decimal::ZERO,
            total_gain: Decimal::ZERO,
            total_gain_percent: Decimal::ZERO,
        }
    }
}

/// Everything the presentation layer needs for summary cards and the three
/// pie charts, recomputed from the enriched holdings each cycle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAllocations {
    /// Sector buckets in first-seen-sector order
    pub sectors: Vec<SectorAllocation>,
    /// Investment per sector, same order as `sectors`
    pub investment_by_sector: Vec<AllocationSlice>,
    /// Present value per sector, same order as `sectors`
    pub present_value_by_sector: Vec<AllocationSlice>,
    /// Total gain per sector, same order as `sectors`
    pub gain_by_sector: Vec<AllocationSlice>,
    pub totals: PortfolioTotals,
}
