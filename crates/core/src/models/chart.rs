use serde::{Deserialize, Serialize};

/// One slice of the allocation breakdown chart: (ticker, market value).
///
/// Derived from the current asset list and recomputed on every list
/// change — no stored identity. The full breakdown is always sorted
/// descending by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    /// Chart label — the asset's ticker symbol.
    pub name: String,

    /// Market value of the holding in the portfolio currency.
    pub value: f64,
}
