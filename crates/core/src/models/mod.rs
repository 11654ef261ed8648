pub mod ai;
pub mod asset;
pub mod chart;
pub mod portfolio;
pub mod price;
pub mod settings;
pub mod stock;
