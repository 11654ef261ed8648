use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::errors::CoreError;
use crate::models::price::PricePoint;
use crate::models::settings::Settings;
use crate::models::stock::StockData;
use crate::session::AuthSession;

use super::http::{build_client, read_json, with_auth};
use super::traits::StockApi;

const SERVICE: &str = "stock";

/// REST client for the stock price backend.
pub struct RestStockClient {
    client: Client,
    base_url: String,
    session: Arc<AuthSession>,
}

impl RestStockClient {
    pub fn new(settings: &Settings, session: Arc<AuthSession>) -> Self {
        Self {
            client: build_client(settings.request_timeout_secs),
            base_url: format!("{}/stocks", settings.api_base_url.trim_end_matches('/')),
            session,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl StockApi for RestStockClient {
    async fn get_stock(&self, symbol: &str) -> Result<StockData, CoreError> {
        let url = format!("{}/{symbol}", self.base_url);
        let resp = with_auth(self.client.get(&url), &self.session)
            .send()
            .await?;
        read_json(SERVICE, resp).await
    }

    async fn get_history(&self, symbol: &str, days: u32) -> Result<Vec<PricePoint>, CoreError> {
        let url = format!("{}/{symbol}/history", self.base_url);
        let resp = with_auth(self.client.get(&url), &self.session)
            .query(&[("days", days)])
            .send()
            .await?;
        read_json(SERVICE, resp).await
    }
}
