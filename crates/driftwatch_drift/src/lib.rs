pub mod analyzer;
pub mod binning;
pub mod classifier;
pub mod error;
pub mod metrics;
pub mod severity;

pub use analyzer::DriftAnalyzer;
pub use error::DriftError;
