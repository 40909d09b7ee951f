use thiserror::Error;

/// Application error types.
///
/// Indicator, level and scoring code is total and never produces these;
/// they only come from the I/O edges (remote analysis, candle loading).
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Analyzer unavailable: {0}")]
    AnalyzerUnavailable(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
