//! MACD (Moving Average Convergence Divergence) indicator.

use super::smoothing::ema;
use crate::services::signals::Indicator;
use crate::types::{Candle, IndicatorCategory, MacdPoint};

/// MACD indicator.
///
/// Shows the relationship between two EMAs of the close:
/// - MACD Line = EMA(12) - EMA(26)
/// - Signal Line = EMA(9) of MACD Line
/// - Histogram = MACD Line - Signal Line
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl Macd {
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            fast_period,
            slow_period,
            signal_period,
        }
    }
}

impl Indicator for Macd {
    type Output = MacdPoint;

    fn id(&self) -> &str {
        "macd"
    }

    fn name(&self) -> &str {
        "MACD"
    }

    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Trend
    }

    fn calculate(&self, candles: &[Candle]) -> Vec<MacdPoint> {
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

        let fast_ema = ema(&closes, self.fast_period);
        let slow_ema = ema(&closes, self.slow_period);

        let macd_line: Vec<f64> = fast_ema
            .iter()
            .zip(slow_ema.iter())
            .map(|(f, s)| f - s)
            .collect();

        let signal_line = ema(&macd_line, self.signal_period);

        macd_line
            .iter()
            .zip(signal_line.iter())
            .map(|(&macd, &signal)| MacdPoint {
                macd,
                signal,
                histogram: macd - signal,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_uptrend_candles(count: usize) -> Vec<Candle> {
        (0..count)
            .map(|i| {
                let base = 100.0 + i as f64 * 1.5;
                Candle {
                    time: 1000000 + i as i64 * 60000,
                    open: base,
                    high: base + 2.0,
                    low: base - 1.0,
                    close: base + 1.0,
                    volume: 1000.0,
                }
            })
            .collect()
    }

    #[test]
    fn test_macd_id_and_name() {
        let macd = Macd::default();
        assert_eq!(macd.id(), "macd");
        assert_eq!(macd.name(), "MACD");
        assert_eq!(macd.category(), IndicatorCategory::Trend);
    }

    #[test]
    fn test_macd_aligned_with_input() {
        let candles = create_uptrend_candles(60);
        assert_eq!(Macd::default().calculate(&candles).len(), 60);
        assert!(Macd::default().calculate(&[]).is_empty());
    }

    #[test]
    fn test_macd_histogram_identity() {
        let candles = create_uptrend_candles(60);
        for point in Macd::default().calculate(&candles) {
            assert_eq!(point.histogram, point.macd - point.signal);
        }
    }

    #[test]
    fn test_macd_positive_in_uptrend() {
        let candles = create_uptrend_candles(60);
        let last = *Macd::default().calculate(&candles).last().unwrap();
        assert!(last.macd > 0.0, "MACD in uptrend should be > 0, got {}", last.macd);
    }

    #[test]
    fn test_macd_single_candle() {
        let candles = create_uptrend_candles(1);
        let out = Macd::default().calculate(&candles);
        assert_eq!(out, vec![MacdPoint::default()]);
    }
}
