use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// AI-generated narrative insight for one portfolio, from
/// `GET /ai/insights/{portfolioId}`. Backs the insights dialog.
///
/// The payload is consumed as an opaque backend contract — the client
/// renders it and never post-processes the narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiInsight {
    pub portfolio_id: i64,

    /// Narrative summary of the portfolio's composition and performance.
    pub summary: String,

    #[serde(default)]
    pub recommendations: Vec<String>,

    /// Coarse risk rating (e.g., "LOW", "MODERATE", "HIGH").
    #[serde(default)]
    pub risk_level: Option<String>,

    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
}
