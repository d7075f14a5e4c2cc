pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod service;
pub mod sheet;

pub use config::AppConfig;
pub use error::AnalyzerError;
pub use models::{Catalog, CatalogItem, Discrepancy, ItemTotal, ParsedTable};
pub use service::{BatchAnalysis, DeliveryAnalyzer};
