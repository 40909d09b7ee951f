use std::env;
use std::time::Duration;

use crate::types::{TimeInterval, TradingStyle};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Symbol the analysis is labelled with.
    pub symbol: String,
    /// Candle interval of the input series.
    pub timeframe: TimeInterval,
    /// Trading style the analysis is tailored to.
    pub trading_style: TradingStyle,
    /// Base URL of the remote AI analysis service. None = local scoring only.
    pub ai_api_url: Option<String>,
    /// Timeout for remote analysis requests (ms).
    pub ai_timeout_ms: u64,
    /// Number of most recent candles kept for analysis.
    pub candle_limit: usize,
    /// Default candle JSON file when none is given on the command line.
    pub candles_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            symbol: env::var("SYMBOL").unwrap_or_else(|_| "BTCUSDT".to_string()),
            timeframe: env::var("TIMEFRAME")
                .ok()
                .and_then(|v| TimeInterval::from_str(&v))
                .unwrap_or_default(),
            trading_style: env::var("TRADING_STYLE")
                .ok()
                .and_then(|v| TradingStyle::from_str(&v))
                .unwrap_or_default(),
            ai_api_url: env::var("AI_API_URL").ok().filter(|v| !v.trim().is_empty()),
            ai_timeout_ms: env::var("AI_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30_000),
            candle_limit: env::var("CANDLE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(100),
            candles_path: env::var("CANDLES_PATH").ok(),
        }
    }

    /// Remote analysis request timeout.
    pub fn ai_timeout(&self) -> Duration {
        Duration::from_millis(self.ai_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
