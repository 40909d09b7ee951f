//! Smoothing primitives shared by the indicators.
//!
//! All three return one value per input value. Indices before the first full
//! window hold the mean of the prefix seen so far instead of being left
//! undefined, so callers can index by absolute candle position.
//!
//! EMA and Wilder smoothing are separate recurrences and must not be swapped:
//! MACD is built on [`ema`], ADX on [`wilder_smooth`].

/// Mean of a slice, summed left to right.
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Simple moving average.
///
/// `out[i]` is the mean of the trailing `period` values, or of `data[..=i]`
/// while fewer than `period` values are available.
pub fn sma(data: &[f64], period: usize) -> Vec<f64> {
    let period = period.max(1);

    (0..data.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(period);
            mean(&data[start..=i])
        })
        .collect()
}

/// Exponential moving average with multiplier `2 / (period + 1)`.
///
/// Seeded at `period - 1` with the SMA of the first `period` values.
pub fn ema(data: &[f64], period: usize) -> Vec<f64> {
    let period = period.max(1);
    let k = 2.0 / (period as f64 + 1.0);
    let mut result = Vec::with_capacity(data.len());
    let mut prev = 0.0;

    for (i, value) in data.iter().enumerate() {
        if i < period - 1 {
            result.push(mean(&data[..=i]));
        } else if i == period - 1 {
            prev = mean(&data[..period]);
            result.push(prev);
        } else {
            prev = value * k + prev * (1.0 - k);
            result.push(prev);
        }
    }

    result
}

/// Wilder's recursive smoothing.
///
/// Running average for the first `period` values, then
/// `out[i] = out[i-1] - out[i-1] / period + data[i]`.
pub fn wilder_smooth(data: &[f64], period: usize) -> Vec<f64> {
    let period = period.max(1);
    let divisor = period as f64;
    let mut result: Vec<f64> = Vec::with_capacity(data.len());
    let mut sum = 0.0;

    for (i, value) in data.iter().enumerate() {
        if i < period {
            sum += value;
            result.push(sum / (i + 1) as f64);
        } else {
            let prev = result[i - 1];
            result.push(prev - (prev / divisor) + value);
        }
    }

    result
}
