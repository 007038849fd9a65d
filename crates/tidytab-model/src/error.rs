use thiserror::Error;

#[derive(Debug, Error)]
pub enum TabError {
    #[error("column not found: {0}")]
    MissingColumn(String),
    #[error("invalid ratio spec `{0}` (expected NAME=NUMERATOR/DENOMINATOR)")]
    InvalidRatioSpec(String),
}

pub type Result<T> = std::result::Result<T, TabError>;
