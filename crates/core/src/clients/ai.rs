use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::errors::CoreError;
use crate::models::ai::AiInsight;
use crate::models::settings::Settings;
use crate::session::AuthSession;

use super::http::{build_client, read_json, with_auth};
use super::traits::AiApi;

const SERVICE: &str = "ai";

/// REST client for the AI insights backend.
pub struct RestAiClient {
    client: Client,
    base_url: String,
    session: Arc<AuthSession>,
}

impl RestAiClient {
    pub fn new(settings: &Settings, session: Arc<AuthSession>) -> Self {
        Self {
            client: build_client(settings.request_timeout_secs),
            base_url: format!("{}/ai", settings.api_base_url.trim_end_matches('/')),
            session,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AiApi for RestAiClient {
    async fn portfolio_insights(&self, portfolio_id: i64) -> Result<AiInsight, CoreError> {
        log::debug!("fetching AI insights for portfolio {portfolio_id}");
        let url = format!("{}/insights/{portfolio_id}", self.base_url);
        let resp = with_auth(self.client.get(&url), &self.session)
            .send()
            .await?;
        read_json(SERVICE, resp).await
    }
}
