//! Rolls enriched holdings up into sector buckets and portfolio totals.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::allocation::{
    AllocationSlice, PortfolioAllocations, PortfolioTotals, SectorAllocation,
};
use crate::holdings::EnrichedHolding;

/// Computes the full allocation bundle for one refresh cycle.
///
/// An empty holdings list yields empty sector buckets and all-zero totals.
pub fn allocate(holdings: &[EnrichedHolding]) -> PortfolioAllocations {
    let sectors = aggregate_sectors(holdings);
    let investment_by_sector = slice_series(&sectors, |s| s.investment);
    let present_value_by_sector = slice_series(&sectors, |s| s.present_value);
    let gain_by_sector = slice_series(&sectors, |s| s.total_gain);
    let totals = portfolio_totals(holdings);

    PortfolioAllocations {
        sectors,
        investment_by_sector,
        present_value_by_sector,
        gain_by_sector,
        totals,
    }
}

/// Single-pass fold of holdings into sector buckets.
///
/// Buckets are created zero-initialized on first encounter and kept in
/// first-seen-sector order. The fold is a plain per-field sum, so it is
/// order-independent in value and chunkable via [`SectorAllocation::merge`].
pub fn aggregate_sectors(holdings: &[EnrichedHolding]) -> Vec<SectorAllocation> {
    let mut buckets: Vec<SectorAllocation> = Vec::new();
    let mut index_by_sector: HashMap<String, usize> = HashMap::new();

    for holding in holdings {
        let index = *index_by_sector
            .entry(holding.sector.clone())
            .or_insert_with(|| {
                buckets.push(SectorAllocation::zero(&holding.sector));
                buckets.len() - 1
            });
        buckets[index].add(holding);
    }

    buckets
}

/// Sums investment and present value across all holdings.
pub fn portfolio_totals(holdings: &[EnrichedHolding]) -> PortfolioTotals {
    let mut investment = Decimal::ZERO;
    let mut present_value = Decimal::ZERO;
    for holding in holdings {
        investment += holding.investment;
        present_value += holding.present_value;
    }

    let total_gain = present_value - investment;
    let total_gain_percent = if investment.is_zero() {
        Decimal::ZERO
    } else {
        total_gain / investment * Decimal::ONE_HUNDRED
    };

    PortfolioTotals {
        investment,
        present_value,
        total_gain,
        total_gain_percent,
    }
}

fn slice_series(
    sectors: &[SectorAllocation],
    value: impl Fn(&SectorAllocation) -> Decimal,
) -> Vec<AllocationSlice> {
    sectors
        .iter()
        .map(|s| AllocationSlice {
            name: s.sector.clone(),
            value: value(s),
        })
        .collect()
}
