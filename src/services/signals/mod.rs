//! Trading signals service module.
//!
//! Provides technical indicator series, support/resistance levels, the
//! rule-based signal scorer and the local trade idea fallback.

pub mod indicators;
pub mod levels;
pub mod scorer;
pub mod trade_idea;

pub use indicators::calculate_indicators;
pub use levels::{fibonacci_levels, pivot_points};
pub use scorer::{score_snapshot, SignalScore};
pub use trade_idea::{fallback_trade_idea, local_trade_idea};

use crate::types::{Candle, IndicatorCategory, IndicatorData, IndicatorSnapshot};

/// Trait for implementing technical indicators.
///
/// Implementations are total: they never fail and always return one output
/// per input candle.
pub trait Indicator {
    /// Value produced for each candle.
    type Output;

    /// Unique identifier for this indicator.
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Category this indicator belongs to.
    fn category(&self) -> IndicatorCategory;

    /// Calculate the series from OHLCV candle data.
    fn calculate(&self, candles: &[Candle]) -> Vec<Self::Output>;
}

impl IndicatorSnapshot {
    /// Latest value of every series. An empty bundle yields the neutral
    /// defaults (RSI 50, everything else zero).
    pub fn latest(data: &IndicatorData) -> Self {
        let defaults = Self::default();

        Self {
            rsi: data.rsi.last().copied().unwrap_or(defaults.rsi),
            macd: data.macd.last().copied().unwrap_or(defaults.macd),
            adx: data.adx.last().copied().unwrap_or(defaults.adx),
            bop: data.bop.last().copied().unwrap_or(defaults.bop),
            obv_trend: indicators::obv_trend(&data.obv),
        }
    }
}

/// Compute the indicator bundle and take its latest snapshot in one step.
pub fn snapshot(candles: &[Candle]) -> IndicatorSnapshot {
    IndicatorSnapshot::latest(&calculate_indicators(candles))
}
