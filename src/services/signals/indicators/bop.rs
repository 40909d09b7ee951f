//! Balance of Power (BOP) indicator.

use crate::services::signals::Indicator;
use crate::types::{Candle, IndicatorCategory};

/// BOP (Balance of Power) indicator.
///
/// Per-candle buyer vs seller dominance: `(close - open) / (high - low)`,
/// 0 for a candle with no range.
#[derive(Default)]
pub struct BalanceOfPower;

impl Indicator for BalanceOfPower {
    type Output = f64;

    fn id(&self) -> &str {
        "bop"
    }

    fn name(&self) -> &str {
        "Balance of Power"
    }

    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Momentum
    }

    fn calculate(&self, candles: &[Candle]) -> Vec<f64> {
        candles
            .iter()
            .map(|c| {
                let range = c.range();
                if range == 0.0 {
                    0.0
                } else {
                    (c.close - c.open) / range
                }
            })
            .collect()
    }
}
