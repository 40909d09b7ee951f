//! Technical indicator implementations.

pub mod adx;
pub mod bop;
pub mod macd;
pub mod obv;
pub mod rsi;
pub mod smoothing;

pub use adx::Adx;
pub use bop::BalanceOfPower;
pub use macd::Macd;
pub use obv::{obv_trend, Obv};
pub use rsi::Rsi;
pub use smoothing::{ema, sma, wilder_smooth};

use super::Indicator;
use crate::types::{Candle, IndicatorData};

/// Compute every chart indicator with its default parameters.
///
/// All series have the same length as `candles`.
pub fn calculate_indicators(candles: &[Candle]) -> IndicatorData {
    IndicatorData {
        macd: Macd::default().calculate(candles),
        rsi: Rsi::default().calculate(candles),
        obv: Obv.calculate(candles),
        volume: candles.iter().map(|c| c.volume).collect(),
        bop: BalanceOfPower.calculate(candles),
        adx: Adx::default().calculate(candles),
    }
}
