//! On-Balance Volume (OBV) indicator.

use crate::services::signals::Indicator;
use crate::types::{Candle, IndicatorCategory, ObvTrend};

/// Number of candles [`obv_trend`] looks back.
pub const OBV_TREND_LOOKBACK: usize = 10;

/// OBV (On-Balance Volume) indicator.
///
/// Cumulative volume starting at 0:
/// - If close > previous close: OBV += volume
/// - If close < previous close: OBV -= volume
/// - Otherwise OBV is carried forward
#[derive(Default)]
pub struct Obv;

impl Indicator for Obv {
    type Output = f64;

    fn id(&self) -> &str {
        "obv"
    }

    fn name(&self) -> &str {
        "OBV"
    }

    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Volume
    }

    fn calculate(&self, candles: &[Candle]) -> Vec<f64> {
        if candles.is_empty() {
            return Vec::new();
        }

        let mut obv = 0.0;
        let mut result = Vec::with_capacity(candles.len());
        result.push(obv);

        for pair in candles.windows(2) {
            let (previous, current) = (&pair[0], &pair[1]);
            if current.close > previous.close {
                obv += current.volume;
            } else if current.close < previous.close {
                obv -= current.volume;
            }
            result.push(obv);
        }

        result
    }
}

/// Compare the latest OBV with the value [`OBV_TREND_LOOKBACK`] candles earlier.
///
/// Anything other than a strict increase, including a series too short to
/// look back over, reads as falling.
pub fn obv_trend(obv: &[f64]) -> ObvTrend {
    let Some(last) = obv.len().checked_sub(1) else {
        return ObvTrend::Falling;
    };

    match last.checked_sub(OBV_TREND_LOOKBACK) {
        Some(earlier) if obv[last] > obv[earlier] => ObvTrend::Rising,
        _ => ObvTrend::Falling,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(close: f64, volume: f64) -> Candle {
        Candle {
            time: 0,
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume,
        }
    }

    #[test]
    fn test_obv_id_and_category() {
        assert_eq!(Obv.id(), "obv");
        assert_eq!(Obv.category(), IndicatorCategory::Volume);
    }

    #[test]
    fn test_obv_accumulates_signed_volume() {
        let candles = vec![
            candle(10.0, 5.0),
            candle(11.0, 3.0),
            candle(11.0, 7.0),
            candle(9.0, 2.0),
        ];
        assert_eq!(Obv.calculate(&candles), vec![0.0, 3.0, 3.0, 1.0]);
    }

    #[test]
    fn test_obv_empty() {
        assert!(Obv.calculate(&[]).is_empty());
    }

    #[test]
    fn test_obv_trend_rising() {
        let obv: Vec<f64> = (0..11).map(|i| i as f64).collect();
        assert_eq!(obv_trend(&obv), ObvTrend::Rising);
    }

    #[test]
    fn test_obv_trend_flat_is_falling() {
        assert_eq!(obv_trend(&[5.0; 20]), ObvTrend::Falling);
    }

    #[test]
    fn test_obv_trend_short_series_is_falling() {
        let obv: Vec<f64> = (0..10).map(|i| i as f64).collect();
        assert_eq!(obv_trend(&obv), ObvTrend::Falling);
        assert_eq!(obv_trend(&[]), ObvTrend::Falling);
    }
}
