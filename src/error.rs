use thiserror::Error;

/// Error types for the k-means engine
#[derive(Error, Debug)]
pub enum KMeansError {
    /// The configuration is invalid (k out of range, bad iteration or tolerance bounds)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The dataset contains no points
    #[error("Dataset is empty")]
    EmptyDataset,

    /// Feature dimensions are inconsistent, either within a dataset or between calls
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Model has not been fitted yet
    #[error("Model has not been fitted. Call fit() first.")]
    NotFitted,
}
