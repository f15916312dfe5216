use driftwatch_types::FeatureKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriftError {
    #[error("Schema mismatch for feature '{feature}': reference is {reference}, current is {current}")]
    SchemaMismatchError {
        feature: String,
        reference: FeatureKind,
        current: FeatureKind,
    },

    #[error("Insufficient Data Error: {0}")]
    InsufficientDataError(String),

    #[error("{0}")]
    InvalidParameterError(String),

    #[error("Failed to construct chi-squared distribution: {0}")]
    ChiSquaredError(String),

    #[error("Failed to analyze feature '{feature}': {source}")]
    FeatureError {
        feature: String,
        #[source]
        source: Box<DriftError>,
    },
}
