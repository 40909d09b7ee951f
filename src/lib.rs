//! TraderPunk - technical indicator engine and signal scoring for crypto charts

pub mod config;
pub mod error;
pub mod services;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use services::{
    analyze_with_fallback, calculate_indicators, fibonacci_levels, pivot_points, score_snapshot,
    Indicator, LocalAnalyzer, RemoteAnalyzer, SignalAnalyzer,
};
pub use types::*;
