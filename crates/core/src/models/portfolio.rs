use serde::{Deserialize, Serialize};

use super::asset::Asset;

/// One row of `GET /portfolios` — enough to render the portfolio picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub id: i64,
    pub name: String,
}

/// A portfolio with its nested asset list, from `GET /portfolios/{id}`.
///
/// The backend owns this data; the client holds a read-through copy that
/// is replaced wholesale on every fetch. Local append/filter after
/// add/remove is an optimization that the next full fetch reconciles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: i64,
    pub name: String,

    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// Outcome reported by the portfolio edit dialog on close.
///
/// Dismissing the dialog without saving is modeled as `None` at the
/// call site ([`Dashboard::apply_dialog_result`](crate::Dashboard::apply_dialog_result)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortfolioDialogResult {
    /// A portfolio was created or edited; carries its backend id.
    Saved { id: i64 },
    /// The portfolio was deleted.
    Deleted,
}
