// ═══════════════════════════════════════════════════════════════════
// Model Tests — wire contracts (camelCase JSON), Asset valuation,
// AssetForm validation, Settings defaults
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;

use portfolio_dashboard_core::errors::CoreError;
use portfolio_dashboard_core::models::ai::AiInsight;
use portfolio_dashboard_core::models::asset::{Asset, AssetForm, NewAsset};
use portfolio_dashboard_core::models::portfolio::{Portfolio, PortfolioSummary};
use portfolio_dashboard_core::models::price::PricePoint;
use portfolio_dashboard_core::models::settings::Settings;
use portfolio_dashboard_core::models::stock::StockData;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Asset
// ═══════════════════════════════════════════════════════════════════

mod asset {
    use super::*;

    #[test]
    fn market_value_prefers_server_total() {
        let asset = Asset {
            id: 1,
            ticker_symbol: "AAPL".into(),
            company_name: None,
            quantity: 3.0,
            purchase_price: 90.0,
            current_price: 100.0,
            total_value: Some(305.0),
        };
        assert_eq!(asset.market_value(), 305.0);
    }

    #[test]
    fn market_value_falls_back_to_price_times_quantity() {
        let asset = Asset {
            id: 1,
            ticker_symbol: "AAPL".into(),
            company_name: None,
            quantity: 3.0,
            purchase_price: 90.0,
            current_price: 100.0,
            total_value: None,
        };
        assert_eq!(asset.market_value(), 300.0);
    }

    #[test]
    fn deserializes_from_camel_case_wire_format() {
        let json = r#"{
            "id": 7,
            "tickerSymbol": "AAPL",
            "companyName": "Apple Inc.",
            "quantity": 2.5,
            "purchasePrice": 150.0,
            "currentPrice": 185.0,
            "totalValue": 462.5
        }"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.id, 7);
        assert_eq!(asset.ticker_symbol, "AAPL");
        assert_eq!(asset.company_name.as_deref(), Some("Apple Inc."));
        assert_eq!(asset.total_value, Some(462.5));
    }

    #[test]
    fn optional_wire_fields_default_to_none() {
        let json = r#"{
            "id": 7,
            "tickerSymbol": "AAPL",
            "quantity": 2.5,
            "purchasePrice": 150.0,
            "currentPrice": 185.0
        }"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert!(asset.company_name.is_none());
        assert!(asset.total_value.is_none());
    }

    #[test]
    fn new_asset_serializes_camel_case() {
        let payload = NewAsset {
            ticker_symbol: "AAPL".into(),
            quantity: 1.0,
            purchase_price: 150.0,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["tickerSymbol"], "AAPL");
        assert_eq!(json["purchasePrice"], 150.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  AssetForm validation
// ═══════════════════════════════════════════════════════════════════

mod asset_form {
    use super::*;

    fn valid_form() -> AssetForm {
        AssetForm {
            ticker_symbol: "AAPL".into(),
            quantity: 2.0,
            purchase_price: 150.0,
        }
    }

    #[test]
    fn defaults_match_the_dashboard_form() {
        let form = AssetForm::default();
        assert_eq!(form.ticker_symbol, "");
        assert_eq!(form.quantity, 1.0);
        assert_eq!(form.purchase_price, 0.0);
    }

    #[test]
    fn uppercases_and_trims_the_ticker() {
        let mut form = valid_form();
        form.ticker_symbol = "  aapl ".into();
        let payload = form.validate().unwrap();
        assert_eq!(payload.ticker_symbol, "AAPL");
    }

    #[test]
    fn empty_ticker_is_rejected() {
        let mut form = valid_form();
        form.ticker_symbol = "   ".into();
        let err = form.validate().unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[test]
    fn ticker_of_ten_characters_is_accepted() {
        let mut form = valid_form();
        form.ticker_symbol = "ABCDEFGHIJ".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn ticker_over_ten_characters_is_rejected() {
        let mut form = valid_form();
        form.ticker_symbol = "ABCDEFGHIJK".into();
        let err = form.validate().unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let mut form = valid_form();
        form.quantity = 0.0;
        assert!(form.validate().is_err());
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let mut form = valid_form();
        form.quantity = -1.0;
        assert!(form.validate().is_err());
    }

    #[test]
    fn nan_quantity_is_rejected() {
        let mut form = valid_form();
        form.quantity = f64::NAN;
        assert!(form.validate().is_err());
    }

    #[test]
    fn zero_purchase_price_is_accepted() {
        let mut form = valid_form();
        form.purchase_price = 0.0;
        assert!(form.validate().is_ok());
    }

    #[test]
    fn negative_purchase_price_is_rejected() {
        let mut form = valid_form();
        form.purchase_price = -0.01;
        assert!(form.validate().is_err());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = valid_form();
        form.reset();
        assert_eq!(form, AssetForm::default());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Portfolio / price wire formats
// ═══════════════════════════════════════════════════════════════════

mod wire_formats {
    use super::*;

    #[test]
    fn portfolio_without_assets_defaults_to_empty_list() {
        let json = r#"{"id": 1, "name": "Growth"}"#;
        let portfolio: Portfolio = serde_json::from_str(json).unwrap();
        assert!(portfolio.assets.is_empty());
    }

    #[test]
    fn portfolio_with_nested_assets() {
        let json = r#"{
            "id": 1,
            "name": "Growth",
            "assets": [
                {"id": 7, "tickerSymbol": "AAPL", "quantity": 1.0,
                 "purchasePrice": 150.0, "currentPrice": 185.0}
            ]
        }"#;
        let portfolio: Portfolio = serde_json::from_str(json).unwrap();
        assert_eq!(portfolio.assets.len(), 1);
        assert_eq!(portfolio.assets[0].ticker_symbol, "AAPL");
    }

    #[test]
    fn portfolio_summary_round_trips() {
        let summary = PortfolioSummary {
            id: 3,
            name: "Income".into(),
        };
        let json = serde_json::to_string(&summary).unwrap();
        let back: PortfolioSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, back);
    }

    #[test]
    fn price_point_parses_iso_dates() {
        let json = r#"{"date": "2025-01-15", "price": 185.0}"#;
        let point: PricePoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.date, d(2025, 1, 15));
        assert_eq!(point.price, 185.0);
    }

    #[test]
    fn stock_data_tolerates_missing_optional_fields() {
        let json = r#"{"symbol": "AAPL", "price": 185.0}"#;
        let stock: StockData = serde_json::from_str(json).unwrap();
        assert!(stock.company_name.is_none());
        assert!(stock.change_percent.is_none());
    }

    #[test]
    fn ai_insight_defaults_empty_recommendations() {
        let json = r#"{"portfolioId": 1, "summary": "Balanced."}"#;
        let insight: AiInsight = serde_json::from_str(json).unwrap();
        assert_eq!(insight.portfolio_id, 1);
        assert!(insight.recommendations.is_empty());
        assert!(insight.risk_level.is_none());
        assert!(insight.generated_at.is_none());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults_point_at_the_local_gateway() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, "http://localhost:8080/api");
        assert_eq!(settings.request_timeout_secs, 30);
    }
}
