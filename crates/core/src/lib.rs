pub mod clients;
pub mod errors;
pub mod models;
pub mod services;
pub mod session;

use std::sync::Arc;

use clients::ai::RestAiClient;
use clients::portfolio::RestPortfolioClient;
use clients::stocks::RestStockClient;
use clients::traits::{AiApi, PortfolioApi, StockApi};
use errors::CoreError;
use models::ai::AiInsight;
use models::asset::{Asset, AssetForm};
use models::chart::AllocationEntry;
use models::portfolio::{Portfolio, PortfolioDialogResult, PortfolioSummary};
use models::price::PriceSeries;
use models::settings::Settings;
use models::stock::StockData;
use services::allocation_service::AllocationService;
use session::AuthSession;

/// Days of price history shown for the selected asset.
const HISTORY_DAYS: u32 = 30;

/// Completion token for an in-flight fetch.
///
/// Each fetch of a given kind (portfolio list, portfolio detail) is
/// issued with a fresh monotonic sequence number; a completion whose
/// number is no longer the latest is discarded instead of overwriting
/// newer state. This removes the out-of-order overwrite on rapid
/// re-selection without needing true request cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken {
    seq: u64,
}

/// Dashboard view-state controller.
///
/// Owns the portfolio list, the selected portfolio and its asset list,
/// the derived allocation breakdown, the selected asset's price series,
/// the add-asset form, and two advisory busy flags. It orchestrates the
/// three backend clients and reconciles their results into view state;
/// a frontend only renders what the accessors expose.
///
/// Error policy (mirrors the backend contract split):
/// - read failures (list, detail, history, quote, insights) go to the
///   log sink and leave state untouched, except that a failed history
///   fetch clears the chart rather than leaving it stale;
/// - write failures (add, remove, refresh) additionally record a
///   user-facing alert, preferring the server's business message.
///
/// No failure is fatal; every error stays local to its operation.
pub struct Dashboard {
    portfolio_api: Arc<dyn PortfolioApi>,
    stock_api: Arc<dyn StockApi>,
    ai_api: Arc<dyn AiApi>,
    allocation_service: AllocationService,

    portfolios: Vec<PortfolioSummary>,
    selected_portfolio: Option<Portfolio>,
    assets: Vec<Asset>,
    selected_asset: Option<Asset>,
    allocation: Vec<AllocationEntry>,
    price_series: Option<PriceSeries>,
    form: AssetForm,

    /// Advisory: a list or detail fetch is in flight.
    loading: bool,
    /// Advisory: a mutation (add/remove/refresh) is in flight.
    action_in_progress: bool,

    /// Pending user-facing message from a failed write operation.
    alert: Option<String>,

    list_seq: u64,
    detail_seq: u64,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("portfolios", &self.portfolios.len())
            .field("selected", &self.selected_portfolio_id())
            .field("assets", &self.assets.len())
            .field("loading", &self.loading)
            .field("action_in_progress", &self.action_in_progress)
            .finish()
    }
}

impl Dashboard {
    /// Create a controller over arbitrary client implementations.
    /// Tests pass mocks; production code usually goes through
    /// [`connect`](Self::connect).
    pub fn new(
        portfolio_api: Arc<dyn PortfolioApi>,
        stock_api: Arc<dyn StockApi>,
        ai_api: Arc<dyn AiApi>,
    ) -> Self {
        Self {
            portfolio_api,
            stock_api,
            ai_api,
            allocation_service: AllocationService::new(),
            portfolios: Vec::new(),
            selected_portfolio: None,
            assets: Vec::new(),
            selected_asset: None,
            allocation: Vec::new(),
            price_series: None,
            form: AssetForm::default(),
            loading: false,
            action_in_progress: false,
            alert: None,
            list_seq: 0,
            detail_seq: 0,
        }
    }

    /// Wire a controller to the REST backends described by `settings`,
    /// sharing one auth session across all three clients.
    #[must_use]
    pub fn connect(settings: &Settings, session: Arc<AuthSession>) -> Self {
        Self::new(
            Arc::new(RestPortfolioClient::new(settings, Arc::clone(&session))),
            Arc::new(RestStockClient::new(settings, Arc::clone(&session))),
            Arc::new(RestAiClient::new(settings, session)),
        )
    }

    // ── View-state accessors ────────────────────────────────────────

    #[must_use]
    pub fn portfolios(&self) -> &[PortfolioSummary] {
        &self.portfolios
    }

    #[must_use]
    pub fn selected_portfolio(&self) -> Option<&Portfolio> {
        self.selected_portfolio.as_ref()
    }

    #[must_use]
    pub fn selected_portfolio_id(&self) -> Option<i64> {
        self.selected_portfolio.as_ref().map(|p| p.id)
    }

    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    #[must_use]
    pub fn selected_asset(&self) -> Option<&Asset> {
        self.selected_asset.as_ref()
    }

    /// Allocation breakdown for the current asset list, sorted
    /// descending by value.
    #[must_use]
    pub fn allocation(&self) -> &[AllocationEntry] {
        &self.allocation
    }

    /// Price history series for the selected asset, if one is loaded.
    #[must_use]
    pub fn price_series(&self) -> Option<&PriceSeries> {
        self.price_series.as_ref()
    }

    #[must_use]
    pub fn form(&self) -> &AssetForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AssetForm {
        &mut self.form
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_action_in_progress(&self) -> bool {
        self.action_in_progress
    }

    /// Drain the pending user-facing alert, if any. Write failures set
    /// it; reading it clears it.
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    // ── Portfolio list ──────────────────────────────────────────────

    /// Fetch all portfolios for the current user and auto-select the
    /// first one. An empty list clears the selection and all derived
    /// data. Used on activation and for plain dialog reconciliation.
    pub async fn load_portfolios(&mut self) -> Result<(), CoreError> {
        let token = self.begin_list_fetch();
        let result = self.portfolio_api.list_portfolios().await;
        match self.complete_list_fetch(token, result)? {
            Some(first_id) => self.select_portfolio(first_id).await,
            None => Ok(()),
        }
    }

    /// Mark a portfolio-list reload as started and return its
    /// completion token.
    pub fn begin_list_fetch(&mut self) -> FetchToken {
        self.list_seq += 1;
        self.loading = true;
        FetchToken { seq: self.list_seq }
    }

    /// Apply the result of a portfolio-list reload.
    ///
    /// A completion issued before a newer reload started is discarded.
    /// On success the list is replaced wholesale; an empty list clears
    /// the selection, assets, chart data, and allocation. On failure the
    /// list is cleared and the error goes to the log sink.
    ///
    /// Returns the id to auto-select (the first entry), if any.
    pub fn complete_list_fetch(
        &mut self,
        token: FetchToken,
        result: Result<Vec<PortfolioSummary>, CoreError>,
    ) -> Result<Option<i64>, CoreError> {
        if token.seq != self.list_seq {
            log::debug!(
                "discarding stale portfolio list response (seq {} != {})",
                token.seq,
                self.list_seq
            );
            return Ok(None);
        }
        self.loading = false;
        match result {
            Ok(portfolios) => {
                self.portfolios = portfolios;
                if let Some(first) = self.portfolios.first() {
                    Ok(Some(first.id))
                } else {
                    self.selected_portfolio = None;
                    self.assets.clear();
                    self.selected_asset = None;
                    self.price_series = None;
                    self.recompute_allocation();
                    Ok(None)
                }
            }
            Err(err) => {
                log::error!("failed to load portfolios: {err}");
                self.portfolios.clear();
                Err(err)
            }
        }
    }

    // ── Portfolio selection ─────────────────────────────────────────

    /// Select a portfolio by id: clears the selected asset, fetches the
    /// full portfolio with its assets, replaces the selection, and
    /// recomputes the allocation. On failure the prior selection and
    /// asset list stay untouched.
    pub async fn select_portfolio(&mut self, id: i64) -> Result<(), CoreError> {
        let token = self.begin_portfolio_fetch();
        let result = self.portfolio_api.get_portfolio(id).await;
        self.complete_portfolio_fetch(token, result)
    }

    /// Mark a portfolio detail fetch as started: clears the selected
    /// asset and its chart, sets the loading flag, and returns the
    /// completion token.
    pub fn begin_portfolio_fetch(&mut self) -> FetchToken {
        self.selected_asset = None;
        self.price_series = None;
        self.detail_seq += 1;
        self.loading = true;
        FetchToken {
            seq: self.detail_seq,
        }
    }

    /// Apply the result of a portfolio detail fetch.
    ///
    /// Stale completions are discarded. On success the selected
    /// portfolio and asset list are replaced and the allocation
    /// recomputed; on failure nothing changes and the error goes to the
    /// log sink (reads are never surfaced as alerts).
    pub fn complete_portfolio_fetch(
        &mut self,
        token: FetchToken,
        result: Result<Portfolio, CoreError>,
    ) -> Result<(), CoreError> {
        if token.seq != self.detail_seq {
            log::debug!(
                "discarding stale portfolio response (seq {} != {})",
                token.seq,
                self.detail_seq
            );
            return Ok(());
        }
        self.loading = false;
        match result {
            Ok(mut portfolio) => {
                self.assets = std::mem::take(&mut portfolio.assets);
                self.selected_portfolio = Some(portfolio);
                self.recompute_allocation();
                Ok(())
            }
            Err(err) => {
                log::error!("failed to load portfolio: {err}");
                Err(err)
            }
        }
    }

    // ── Asset mutations ─────────────────────────────────────────────

    /// Submit the add-asset form against the selected portfolio.
    ///
    /// Validation failures never reach the network. On success the
    /// created asset is appended to the local list, the allocation is
    /// recomputed, and the form resets to its defaults. On failure an
    /// alert is recorded (server message when present, generic
    /// otherwise) and local state stays unchanged.
    pub async fn add_asset(&mut self) -> Result<(), CoreError> {
        let portfolio_id = self
            .selected_portfolio_id()
            .ok_or(CoreError::NoPortfolioSelected)?;
        let payload = self.form.validate()?;

        self.action_in_progress = true;
        let result = self.portfolio_api.add_asset(portfolio_id, &payload).await;
        self.action_in_progress = false;

        match result {
            Ok(asset) => {
                self.assets.push(asset);
                self.recompute_allocation();
                self.form.reset();
                Ok(())
            }
            Err(err) => {
                self.alert = Some(
                    err.server_message()
                        .map_or_else(|| "Failed to add asset".to_string(), str::to_string),
                );
                Err(err)
            }
        }
    }

    /// Remove an asset from the selected portfolio by id.
    ///
    /// Destructive: the caller is expected to have confirmed with the
    /// user first. On success the asset is filtered out of the local
    /// list and the allocation recomputed; removing the currently
    /// selected asset also clears its chart so no cross-asset data
    /// lingers. On failure a generic alert is recorded and state stays
    /// unchanged.
    pub async fn remove_asset(&mut self, asset_id: i64) -> Result<(), CoreError> {
        let portfolio_id = self
            .selected_portfolio_id()
            .ok_or(CoreError::NoPortfolioSelected)?;

        self.action_in_progress = true;
        let result = self
            .portfolio_api
            .remove_asset(portfolio_id, asset_id)
            .await;
        self.action_in_progress = false;

        match result {
            Ok(()) => {
                self.assets.retain(|a| a.id != asset_id);
                if self
                    .selected_asset
                    .as_ref()
                    .is_some_and(|a| a.id == asset_id)
                {
                    self.selected_asset = None;
                    self.price_series = None;
                }
                self.recompute_allocation();
                Ok(())
            }
            Err(err) => {
                self.alert = Some("Failed to remove asset".to_string());
                Err(err)
            }
        }
    }

    /// Trigger a backend price refresh for the selected portfolio, then
    /// re-select it (full reload) to pick up the updated prices.
    ///
    /// The refresh and any concurrent add/remove are independent
    /// operations; nothing makes the pair atomic.
    pub async fn refresh_prices(&mut self) -> Result<(), CoreError> {
        let portfolio_id = self
            .selected_portfolio_id()
            .ok_or(CoreError::NoPortfolioSelected)?;

        self.action_in_progress = true;
        let result = self.portfolio_api.refresh_prices(portfolio_id).await;
        self.action_in_progress = false;

        match result {
            Ok(()) => self.select_portfolio(portfolio_id).await,
            Err(err) => {
                self.alert = Some("Failed to refresh prices".to_string());
                Err(err)
            }
        }
    }

    // ── Asset selection & charts ────────────────────────────────────

    /// Select an asset and fetch its 30-day price history as a single
    /// named series. On failure the series is cleared rather than left
    /// stale, and the error goes to the log sink.
    pub async fn select_asset(&mut self, asset: Asset) -> Result<(), CoreError> {
        let symbol = asset.ticker_symbol.clone();
        self.selected_asset = Some(asset);

        match self.stock_api.get_history(&symbol, HISTORY_DAYS).await {
            Ok(points) => {
                self.price_series = Some(PriceSeries {
                    name: symbol,
                    points,
                });
                Ok(())
            }
            Err(err) => {
                self.price_series = None;
                log::error!("failed to load price history for {symbol}: {err}");
                Err(err)
            }
        }
    }

    fn recompute_allocation(&mut self) {
        self.allocation = self.allocation_service.compute(&self.assets);
    }

    // ── Dialog reconciliation ───────────────────────────────────────

    /// Reconcile the portfolio edit dialog's outcome into view state.
    ///
    /// `Saved { id }` reloads the portfolio list and, once the reload
    /// has completed, selects the saved portfolio when the refreshed
    /// list contains it — otherwise the default first-portfolio rule
    /// applies. `Deleted` or a dismissed dialog (`None`) triggers a
    /// plain reload.
    pub async fn apply_dialog_result(
        &mut self,
        result: Option<PortfolioDialogResult>,
    ) -> Result<(), CoreError> {
        match result {
            Some(PortfolioDialogResult::Saved { id }) => self.reload_and_select(id).await,
            Some(PortfolioDialogResult::Deleted) | None => self.load_portfolios().await,
        }
    }

    /// Reload the list, then select `preferred_id` when present in the
    /// refreshed list, falling back to the first portfolio otherwise.
    async fn reload_and_select(&mut self, preferred_id: i64) -> Result<(), CoreError> {
        let token = self.begin_list_fetch();
        let result = self.portfolio_api.list_portfolios().await;
        let default_id = self.complete_list_fetch(token, result)?;

        let target = if self.portfolios.iter().any(|p| p.id == preferred_id) {
            Some(preferred_id)
        } else {
            default_id
        };
        match target {
            Some(id) => self.select_portfolio(id).await,
            None => Ok(()),
        }
    }

    // ── Dialog data sources ─────────────────────────────────────────

    /// Fetch the AI-generated insight for the selected portfolio (the
    /// insights dialog's data).
    pub async fn portfolio_insights(&self) -> Result<AiInsight, CoreError> {
        let portfolio_id = self
            .selected_portfolio_id()
            .ok_or(CoreError::NoPortfolioSelected)?;
        self.ai_api
            .portfolio_insights(portfolio_id)
            .await
            .inspect_err(|err| {
                log::error!("failed to fetch AI insights for portfolio {portfolio_id}: {err}");
            })
    }

    /// Fetch the current quote for a symbol (the asset detail dialog's
    /// data).
    pub async fn stock_quote(&self, symbol: &str) -> Result<StockData, CoreError> {
        self.stock_api.get_stock(symbol).await.inspect_err(|err| {
            log::error!("failed to fetch quote for {symbol}: {err}");
        })
    }
}
