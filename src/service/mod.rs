pub mod aggregator;
pub mod analyzer;
pub mod extractor;
pub mod parser;
pub mod reconciler;

pub use aggregator::analyze_selection;
pub use analyzer::{BatchAnalysis, DeliveryAnalyzer};
pub use extractor::extract_summary;
pub use parser::parse_orders;
pub use reconciler::validate_against_summary;
