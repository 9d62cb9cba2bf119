use thiserror::Error;

/// Failures while loading or persisting formatting preferences.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Raised only by the strict `FromStr` path; `Frequency::from_tag` never fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrequencyError {
    #[error("Unknown frequency tag: {0}")]
    Unknown(String),
}
