use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::ai::AiInsight;
use crate::models::asset::{Asset, NewAsset};
use crate::models::portfolio::{Portfolio, PortfolioSummary};
use crate::models::price::PricePoint;
use crate::models::stock::StockData;

/// Portfolio CRUD against the backend.
///
/// Each method translates to exactly one REST call. The shims hold no
/// state and perform no retries, caching, or backoff — any such policy
/// belongs to a layer above them. The dashboard controller depends on
/// this trait, so tests can substitute a mock backend.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PortfolioApi: Send + Sync {
    /// `GET /portfolios` — all portfolios for the current user.
    async fn list_portfolios(&self) -> Result<Vec<PortfolioSummary>, CoreError>;

    /// `GET /portfolios/{id}` — one portfolio with its nested assets.
    async fn get_portfolio(&self, id: i64) -> Result<Portfolio, CoreError>;

    /// `POST /portfolios/{id}/assets` — add a holding; returns the
    /// created asset as stored by the backend.
    async fn add_asset(&self, portfolio_id: i64, asset: &NewAsset) -> Result<Asset, CoreError>;

    /// `DELETE /portfolios/{id}/assets/{assetId}` — remove a holding.
    async fn remove_asset(&self, portfolio_id: i64, asset_id: i64) -> Result<(), CoreError>;

    /// `POST /portfolios/{id}/refresh-prices` — trigger a server-side
    /// price update. The caller re-fetches the portfolio afterwards.
    async fn refresh_prices(&self, portfolio_id: i64) -> Result<(), CoreError>;
}

/// Price lookups for individual symbols.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait StockApi: Send + Sync {
    /// `GET /stocks/{symbol}` — current quote.
    async fn get_stock(&self, symbol: &str) -> Result<StockData, CoreError>;

    /// `GET /stocks/{symbol}/history?days=N` — ordered (date, price)
    /// history for the last `days` days.
    async fn get_history(&self, symbol: &str, days: u32) -> Result<Vec<PricePoint>, CoreError>;
}

/// AI-generated portfolio insights.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AiApi: Send + Sync {
    /// `GET /ai/insights/{portfolioId}` — narrative insight payload.
    async fn portfolio_insights(&self, portfolio_id: i64) -> Result<AiInsight, CoreError>;
}
