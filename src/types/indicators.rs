use serde::{Deserialize, Serialize};

/// Category of a technical indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorCategory {
    Trend,
    Momentum,
    Volume,
}

impl IndicatorCategory {
    /// Get display name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            IndicatorCategory::Trend => "Trend",
            IndicatorCategory::Momentum => "Momentum",
            IndicatorCategory::Volume => "Volume",
        }
    }
}

/// One MACD sample.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacdPoint {
    pub macd: f64,
    pub signal: f64,
    /// Always `macd - signal`.
    pub histogram: f64,
}

/// One ADX sample with its directional indicators.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AdxPoint {
    pub adx: f64,
    #[serde(rename = "plusDI")]
    pub plus_di: f64,
    #[serde(rename = "minusDI")]
    pub minus_di: f64,
}

/// Every indicator series for a candle sequence.
///
/// Each vector is aligned with the input: `series[i]` belongs to `candles[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorData {
    pub macd: Vec<MacdPoint>,
    pub rsi: Vec<f64>,
    pub obv: Vec<f64>,
    pub volume: Vec<f64>,
    pub bop: Vec<f64>,
    pub adx: Vec<AdxPoint>,
}

impl IndicatorData {
    /// Number of candles the series were computed from.
    pub fn len(&self) -> usize {
        self.rsi.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rsi.is_empty()
    }
}

/// Direction of on-balance volume over the last ten candles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObvTrend {
    Rising,
    Falling,
}

impl ObvTrend {
    pub fn label(&self) -> &'static str {
        match self {
            ObvTrend::Rising => "Rising",
            ObvTrend::Falling => "Falling",
        }
    }
}

/// Latest value of each indicator, as handed to the analyzers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    pub rsi: f64,
    pub macd: MacdPoint,
    pub adx: AdxPoint,
    pub bop: f64,
    pub obv_trend: ObvTrend,
}

impl Default for IndicatorSnapshot {
    fn default() -> Self {
        Self {
            rsi: 50.0,
            macd: MacdPoint::default(),
            adx: AdxPoint::default(),
            bop: 0.0,
            obv_trend: ObvTrend::Falling,
        }
    }
}

/// Classical floor pivot levels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PivotPoints {
    pub pivot: f64,
    pub r1: f64,
    pub r2: f64,
    pub r3: f64,
    pub s1: f64,
    pub s2: f64,
    pub s3: f64,
}

/// Fibonacci retracement and extension levels over a recent range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FibonacciLevels {
    pub high: f64,
    pub low: f64,
    pub level236: f64,
    pub level382: f64,
    pub level500: f64,
    pub level618: f64,
    pub level786: f64,
    pub extension1272: f64,
    pub extension1618: f64,
}
