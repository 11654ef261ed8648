use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::errors::CoreError;
use crate::models::asset::{Asset, NewAsset};
use crate::models::portfolio::{Portfolio, PortfolioSummary};
use crate::models::settings::Settings;
use crate::session::AuthSession;

use super::http::{build_client, read_empty, read_json, with_auth};
use super::traits::PortfolioApi;

const SERVICE: &str = "portfolio";

/// REST client for the portfolio backend.
///
/// Stateless shim: every method is one REST call with the session's
/// bearer token attached when present. Success values and transport
/// errors pass through to the caller untouched.
pub struct RestPortfolioClient {
    client: Client,
    base_url: String,
    session: Arc<AuthSession>,
}

impl RestPortfolioClient {
    pub fn new(settings: &Settings, session: Arc<AuthSession>) -> Self {
        Self {
            client: build_client(settings.request_timeout_secs),
            base_url: format!(
                "{}/portfolios",
                settings.api_base_url.trim_end_matches('/')
            ),
            session,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PortfolioApi for RestPortfolioClient {
    async fn list_portfolios(&self) -> Result<Vec<PortfolioSummary>, CoreError> {
        let resp = with_auth(self.client.get(&self.base_url), &self.session)
            .send()
            .await?;
        read_json(SERVICE, resp).await
    }

    async fn get_portfolio(&self, id: i64) -> Result<Portfolio, CoreError> {
        let url = format!("{}/{id}", self.base_url);
        let resp = with_auth(self.client.get(&url), &self.session)
            .send()
            .await?;
        read_json(SERVICE, resp).await
    }

    async fn add_asset(&self, portfolio_id: i64, asset: &NewAsset) -> Result<Asset, CoreError> {
        let url = format!("{}/{portfolio_id}/assets", self.base_url);
        let resp = with_auth(self.client.post(&url), &self.session)
            .json(asset)
            .send()
            .await?;
        read_json(SERVICE, resp).await
    }

    async fn remove_asset(&self, portfolio_id: i64, asset_id: i64) -> Result<(), CoreError> {
        let url = format!("{}/{portfolio_id}/assets/{asset_id}", self.base_url);
        let resp = with_auth(self.client.delete(&url), &self.session)
            .send()
            .await?;
        read_empty(SERVICE, resp).await
    }

    async fn refresh_prices(&self, portfolio_id: i64) -> Result<(), CoreError> {
        let url = format!("{}/{portfolio_id}/refresh-prices", self.base_url);
        let resp = with_auth(self.client.post(&url), &self.session)
            .send()
            .await?;
        read_empty(SERVICE, resp).await
    }
}
