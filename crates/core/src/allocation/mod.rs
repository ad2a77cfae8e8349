//! Allocation: sector roll-ups and portfolio totals for the dashboard.

mod allocation_model;
mod allocation_service;


pub use allocation_model::{
    AllocationSlice, PortfolioAllocations, PortfolioTotals, SectorAllocation,
};
pub use allocation_service::{aggregate_sectors, allocate, portfolio_totals};
