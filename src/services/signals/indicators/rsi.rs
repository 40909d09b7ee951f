//! Relative Strength Index (RSI) indicator.

use super::smoothing::sma;
use crate::services::signals::Indicator;
use crate::types::{Candle, IndicatorCategory};

/// Value reported for the first candle, which has no previous close.
pub const RSI_SEED_VALUE: f64 = 50.0;

/// RSI (Relative Strength Index) indicator.
///
/// Measures momentum by comparing the magnitude of recent gains to recent losses.
/// Average gain and loss use the simple moving average with a growing window
/// for the first `period` changes. Values range from 0-100:
/// - Below 30: Oversold (potential buy signal)
/// - Above 70: Overbought (potential sell signal)
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Rsi {
    type Output = f64;

    fn id(&self) -> &str {
        "rsi"
    }

    fn name(&self) -> &str {
        "RSI (14)"
    }

    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Momentum
    }

    fn calculate(&self, candles: &[Candle]) -> Vec<f64> {
        if candles.is_empty() {
            return Vec::new();
        }

        let (gains, losses): (Vec<f64>, Vec<f64>) = candles
            .windows(2)
            .map(|pair| {
                let change = pair[1].close - pair[0].close;
                if change > 0.0 {
                    (change, 0.0)
                } else if change < 0.0 {
                    (0.0, -change)
                } else {
                    (0.0, 0.0)
                }
            })
            .unzip();

        let avg_gains = sma(&gains, self.period);
        let avg_losses = sma(&losses, self.period);

        let mut result = Vec::with_capacity(candles.len());
        result.push(RSI_SEED_VALUE);
        result.extend(avg_gains.iter().zip(avg_losses.iter()).map(|(&gain, &loss)| {
            if loss == 0.0 {
                return 100.0;
            }
            let rs = gain / loss;
            100.0 - (100.0 / (1.0 + rs))
        }));

        result
    }
}
