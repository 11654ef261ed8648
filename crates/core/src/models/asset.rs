use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Maximum ticker length accepted by the add-asset form.
const MAX_TICKER_LEN: usize = 10;

/// A single holding inside a portfolio, as returned by the backend.
///
/// Field names follow the backend's camelCase wire contract
/// (`tickerSymbol`, `purchasePrice`, …). The client never mutates an
/// asset in place — lists are appended to or filtered by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: i64,

    /// Ticker symbol, uppercased by the backend (e.g., "AAPL").
    pub ticker_symbol: String,

    #[serde(default)]
    pub company_name: Option<String>,

    pub quantity: f64,

    /// Cost basis per unit at purchase time.
    pub purchase_price: f64,

    /// Latest price known to the backend.
    pub current_price: f64,

    /// Server-side precomputed quantity × current price, when provided.
    #[serde(default)]
    pub total_value: Option<f64>,
}

impl Asset {
    /// Current market value of this holding: the precomputed total when
    /// the server sent one, otherwise current price × quantity.
    #[must_use]
    pub fn market_value(&self) -> f64 {
        self.total_value
            .unwrap_or(self.current_price * self.quantity)
    }
}

/// Wire payload for `POST /portfolios/{id}/assets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub ticker_symbol: String,
    pub quantity: f64,
    pub purchase_price: f64,
}

/// State of the add-asset input form.
///
/// Defaults mirror the dashboard form: quantity 1, purchase price 0,
/// empty ticker. [`validate`](Self::validate) gates submission — a form
/// that fails validation never reaches the network layer.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetForm {
    pub ticker_symbol: String,
    pub quantity: f64,
    pub purchase_price: f64,
}

impl Default for AssetForm {
    fn default() -> Self {
        Self {
            ticker_symbol: String::new(),
            quantity: 1.0,
            purchase_price: 0.0,
        }
    }
}

impl AssetForm {
    /// Validate the form and produce the wire payload.
    ///
    /// Rules:
    /// - ticker non-empty after trimming, at most 10 characters
    /// - quantity strictly positive
    /// - purchase price zero or positive
    ///
    /// The ticker is normalized to uppercase before submission, so
    /// "aapl" is sent as "AAPL".
    pub fn validate(&self) -> Result<NewAsset, CoreError> {
        let ticker = self.ticker_symbol.trim().to_uppercase();
        if ticker.is_empty() {
            return Err(CoreError::ValidationError(
                "Ticker symbol is required".into(),
            ));
        }
        if ticker.len() > MAX_TICKER_LEN {
            return Err(CoreError::ValidationError(format!(
                "Ticker symbol '{ticker}' exceeds {MAX_TICKER_LEN} characters"
            )));
        }
        if self.quantity <= 0.0 || self.quantity.is_nan() {
            return Err(CoreError::ValidationError(
                "Quantity must be positive".into(),
            ));
        }
        if self.purchase_price < 0.0 || self.purchase_price.is_nan() {
            return Err(CoreError::ValidationError(
                "Purchase price must not be negative".into(),
            ));
        }

        Ok(NewAsset {
            ticker_symbol: ticker,
            quantity: self.quantity,
            purchase_price: self.purchase_price,
        })
    }

    /// Restore the defaults (empty ticker, quantity 1, price 0).
    /// Called after a successful submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
