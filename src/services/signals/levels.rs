//! Support/resistance level calculators.
//!
//! Both work on a trailing window of the candle sequence rather than the full
//! history and return a single snapshot.

use crate::types::{Candle, FibonacciLevels, PivotPoints};

/// Candles considered for pivot points.
pub const PIVOT_WINDOW: usize = 20;

/// Candles considered for Fibonacci levels.
pub const FIBONACCI_WINDOW: usize = 50;

const RETRACEMENTS: [f64; 5] = [0.236, 0.382, 0.5, 0.618, 0.786];
const EXTENSION_1272: f64 = 0.272;
const EXTENSION_1618: f64 = 0.618;

/// Highest high and lowest low over the last `window` candles.
fn window_extremes(candles: &[Candle], window: usize) -> (f64, f64) {
    let start = candles.len().saturating_sub(window);
    candles[start..]
        .iter()
        .fold((f64::NEG_INFINITY, f64::INFINITY), |(high, low), c| {
            (high.max(c.high), low.min(c.low))
        })
}

/// Classical pivot points from the last [`PIVOT_WINDOW`] candles' high/low
/// and the final close. Empty input gives all zeros.
pub fn pivot_points(candles: &[Candle]) -> PivotPoints {
    let Some(last) = candles.last() else {
        return PivotPoints::default();
    };

    let (high, low) = window_extremes(candles, PIVOT_WINDOW);
    let close = last.close;

    let pivot = (high + low + close) / 3.0;
    let range = high - low;

    PivotPoints {
        pivot,
        r1: (2.0 * pivot) - low,
        r2: pivot + range,
        r3: pivot + (2.0 * range),
        s1: (2.0 * pivot) - high,
        s2: pivot - range,
        s3: pivot - (2.0 * range),
    }
}

/// Fibonacci retracements and extensions over the last [`FIBONACCI_WINDOW`]
/// candles.
///
/// When the last close sits above the middle of the range the move is treated
/// as an uptrend: retracements are measured down from the high and extensions
/// project above it. Otherwise everything mirrors off the low.
pub fn fibonacci_levels(candles: &[Candle]) -> FibonacciLevels {
    let Some(last) = candles.last() else {
        return FibonacciLevels::default();
    };

    let (high, low) = window_extremes(candles, FIBONACCI_WINDOW);
    let range = high - low;
    let is_uptrend = last.close > (high + low) / 2.0;

    let [l236, l382, l500, l618, l786] = if is_uptrend {
        RETRACEMENTS.map(|ratio| high - (range * ratio))
    } else {
        RETRACEMENTS.map(|ratio| low + (range * ratio))
    };

    let (extension1272, extension1618) = if is_uptrend {
        (high + (range * EXTENSION_1272), high + (range * EXTENSION_1618))
    } else {
        (low - (range * EXTENSION_1272), low - (range * EXTENSION_1618))
    };

    FibonacciLevels {
        high,
        low,
        level236: l236,
        level382: l382,
        level500: l500,
        level618: l618,
        level786: l786,
        extension1272,
        extension1618,
    }
}
