use serde::{Deserialize, Serialize};

/// Candle interval used when fetching chart data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeInterval {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "3m")]
    ThreeMinutes,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[default]
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    OneWeek,
}

impl TimeInterval {
    /// Intervals offered in the timeframe selector.
    pub const SELECTABLE: [TimeInterval; 6] = [
        TimeInterval::OneMinute,
        TimeInterval::ThreeMinutes,
        TimeInterval::FiveMinutes,
        TimeInterval::FifteenMinutes,
        TimeInterval::OneHour,
        TimeInterval::FourHours,
    ];

    /// Get the interval from its exchange code (e.g. "15m").
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "1m" => Some(TimeInterval::OneMinute),
            "3m" => Some(TimeInterval::ThreeMinutes),
            "5m" => Some(TimeInterval::FiveMinutes),
            "15m" => Some(TimeInterval::FifteenMinutes),
            "1h" => Some(TimeInterval::OneHour),
            "4h" => Some(TimeInterval::FourHours),
            "1d" => Some(TimeInterval::OneDay),
            "1w" => Some(TimeInterval::OneWeek),
            _ => None,
        }
    }

    /// Exchange code for this interval.
    pub fn code(&self) -> &'static str {
        match self {
            TimeInterval::OneMinute => "1m",
            TimeInterval::ThreeMinutes => "3m",
            TimeInterval::FiveMinutes => "5m",
            TimeInterval::FifteenMinutes => "15m",
            TimeInterval::OneHour => "1h",
            TimeInterval::FourHours => "4h",
            TimeInterval::OneDay => "1d",
            TimeInterval::OneWeek => "1w",
        }
    }

    /// Short upper-case label shown in the selector.
    pub fn label(&self) -> &'static str {
        match self {
            TimeInterval::OneMinute => "1M",
            TimeInterval::ThreeMinutes => "3M",
            TimeInterval::FiveMinutes => "5M",
            TimeInterval::FifteenMinutes => "15M",
            TimeInterval::OneHour => "1H",
            TimeInterval::FourHours => "4H",
            TimeInterval::OneDay => "1D",
            TimeInterval::OneWeek => "1W",
        }
    }

    /// Candle duration in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        match self {
            TimeInterval::OneMinute => 60_000,
            TimeInterval::ThreeMinutes => 180_000,
            TimeInterval::FiveMinutes => 300_000,
            TimeInterval::FifteenMinutes => 900_000,
            TimeInterval::OneHour => 3_600_000,
            TimeInterval::FourHours => 14_400_000,
            TimeInterval::OneDay => 86_400_000,
            TimeInterval::OneWeek => 604_800_000,
        }
    }
}

/// OHLCV candle. Sequences are ordered oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Open time, unix milliseconds.
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// Check the OHLC invariant: `low <= min(open, close) <= max(open, close) <= high`
    /// with finite prices and non-negative volume.
    pub fn is_well_formed(&self) -> bool {
        let finite = [self.open, self.high, self.low, self.close, self.volume]
            .iter()
            .all(|v| v.is_finite());

        finite
            && self.low <= self.open.min(self.close)
            && self.open.max(self.close) <= self.high
            && self.volume >= 0.0
    }

    /// High minus low.
    pub fn range(&self) -> f64 {
        self.high - self.low
    }
}
