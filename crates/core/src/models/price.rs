use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single price data point (date → price), as returned by
/// `GET /stocks/{symbol}/history?days=N`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// A named line-chart series: the selected asset's ticker plus its
/// history points. Fetched on demand when an asset is selected and
/// never persisted across selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Series label — the asset's ticker symbol.
    pub name: String,
    pub points: Vec<PricePoint>,
}
