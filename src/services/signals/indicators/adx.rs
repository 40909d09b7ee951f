//! Average Directional Index (ADX) indicator.

use super::smoothing::wilder_smooth;
use crate::services::signals::Indicator;
use crate::types::{AdxPoint, Candle, IndicatorCategory};

/// ADX (Average Directional Index) indicator.
///
/// Measures trend strength (ADX) and direction (+DI vs -DI).
/// True range and directional movement are smoothed with Wilder's
/// recurrence, then DX is smoothed again into ADX. The first candle has no
/// previous bar and reports all zeros.
pub struct Adx {
    period: usize,
}

impl Default for Adx {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Adx {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Calculate True Range.
    fn true_range(current: &Candle, previous: &Candle) -> f64 {
        let hl = current.high - current.low;
        let hc = (current.high - previous.close).abs();
        let lc = (current.low - previous.close).abs();
        hl.max(hc).max(lc)
    }

    /// +DM and -DM for a pair of candles. At most one of them is non-zero.
    fn directional_movement(current: &Candle, previous: &Candle) -> (f64, f64) {
        let up_move = current.high - previous.high;
        let down_move = previous.low - current.low;

        let plus_dm = if up_move > down_move && up_move > 0.0 {
            up_move
        } else {
            0.0
        };
        let minus_dm = if down_move > up_move && down_move > 0.0 {
            down_move
        } else {
            0.0
        };

        (plus_dm, minus_dm)
    }
}

impl Indicator for Adx {
    type Output = AdxPoint;

    fn id(&self) -> &str {
        "adx"
    }

    fn name(&self) -> &str {
        "ADX (14)"
    }

    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Trend
    }

    fn calculate(&self, candles: &[Candle]) -> Vec<AdxPoint> {
        if candles.len() < 2 {
            return vec![AdxPoint::default(); candles.len()];
        }

        let steps = candles.len() - 1;
        let mut tr = Vec::with_capacity(steps);
        let mut plus_dm = Vec::with_capacity(steps);
        let mut minus_dm = Vec::with_capacity(steps);

        for pair in candles.windows(2) {
            let (previous, current) = (&pair[0], &pair[1]);
            tr.push(Self::true_range(current, previous));
            let (plus, minus) = Self::directional_movement(current, previous);
            plus_dm.push(plus);
            minus_dm.push(minus);
        }

        let smoothed_tr = wilder_smooth(&tr, self.period);
        let smoothed_plus_dm = wilder_smooth(&plus_dm, self.period);
        let smoothed_minus_dm = wilder_smooth(&minus_dm, self.period);

        let mut plus_di = Vec::with_capacity(steps);
        let mut minus_di = Vec::with_capacity(steps);
        let mut dx = Vec::with_capacity(steps);

        for i in 0..steps {
            let atr = smoothed_tr[i];
            let pdi = if atr > 0.0 {
                (smoothed_plus_dm[i] / atr) * 100.0
            } else {
                0.0
            };
            let mdi = if atr > 0.0 {
                (smoothed_minus_dm[i] / atr) * 100.0
            } else {
                0.0
            };

            let di_sum = pdi + mdi;
            dx.push(if di_sum > 0.0 {
                ((pdi - mdi).abs() / di_sum) * 100.0
            } else {
                0.0
            });
            plus_di.push(pdi);
            minus_di.push(mdi);
        }

        let adx = wilder_smooth(&dx, self.period);

        let mut result = Vec::with_capacity(candles.len());
        result.push(AdxPoint::default());
        result.extend((0..steps).map(|i| AdxPoint {
            adx: adx[i],
            plus_di: plus_di[i],
            minus_di: minus_di[i],
        }));

        result
    }
}
