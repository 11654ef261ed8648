pub mod traits;

pub(crate) mod http;

// REST client implementations, one per backend service
pub mod ai;
pub mod portfolio;
pub mod stocks;
