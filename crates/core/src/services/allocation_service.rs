use crate::models::asset::Asset;
use crate::models::chart::AllocationEntry;

/// Computes the allocation breakdown chart from an asset list.
///
/// Pure business logic — no I/O, no API calls. Easy to test.
pub struct AllocationService;

impl AllocationService {
    pub fn new() -> Self {
        Self
    }

    /// Map the asset list to (ticker, market value) entries, sorted
    /// descending by value.
    ///
    /// Deterministic and idempotent: the same asset list always yields
    /// the same sequence. The sort is stable, so equal values keep the
    /// asset list's order.
    #[must_use]
    pub fn compute(&self, assets: &[Asset]) -> Vec<AllocationEntry> {
        let mut entries: Vec<AllocationEntry> = assets
            .iter()
            .map(|a| AllocationEntry {
                name: a.ticker_symbol.clone(),
                value: a.market_value(),
            })
            .collect();
        entries.sort_by(|x, y| {
            y.value
                .partial_cmp(&x.value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        entries
    }
}

impl Default for AllocationService {
    fn default() -> Self {
        Self::new()
    }
}
