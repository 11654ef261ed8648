use serde::{Deserialize, Serialize};

/// Current quote for a single symbol, from `GET /stocks/{symbol}`.
/// Backs the asset detail dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockData {
    pub symbol: String,

    #[serde(default)]
    pub company_name: Option<String>,

    pub price: f64,

    /// Day-over-day change in percent, when the backend provides it.
    #[serde(default)]
    pub change_percent: Option<f64>,
}
