use serde::{Deserialize, Serialize};

use super::TimeInterval;

/// The trader profile an analysis is tailored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TradingStyle {
    /// Quick in-and-out trades on the shortest intervals.
    Scalper,
    /// Intraday positions.
    #[default]
    DayTrader,
    /// Holds for days to weeks.
    SwingTrader,
    /// Long-term holds.
    Investor,
}

/// How much risk a trading style accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

/// Static thresholds and preferences for a trading style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingStyleConfig {
    pub id: TradingStyle,
    pub name: &'static str,
    pub description: &'static str,
    pub preferred_timeframes: &'static [TimeInterval],
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
    pub adx_strength_threshold: f64,
    pub risk_tolerance: RiskTolerance,
}

const SCALPER: TradingStyleConfig = TradingStyleConfig {
    id: TradingStyle::Scalper,
    name: "Scalper",
    description: "Quick in-and-out trades, small profits",
    preferred_timeframes: &[
        TimeInterval::OneMinute,
        TimeInterval::ThreeMinutes,
        TimeInterval::FiveMinutes,
    ],
    rsi_overbought: 75.0,
    rsi_oversold: 25.0,
    adx_strength_threshold: 20.0,
    risk_tolerance: RiskTolerance::High,
};

const DAY_TRADER: TradingStyleConfig = TradingStyleConfig {
    id: TradingStyle::DayTrader,
    name: "Day Trader",
    description: "Intraday positions, close by market end",
    preferred_timeframes: &[
        TimeInterval::FiveMinutes,
        TimeInterval::FifteenMinutes,
        TimeInterval::OneHour,
    ],
    rsi_overbought: 70.0,
    rsi_oversold: 30.0,
    adx_strength_threshold: 25.0,
    risk_tolerance: RiskTolerance::Medium,
};

const SWING_TRADER: TradingStyleConfig = TradingStyleConfig {
    id: TradingStyle::SwingTrader,
    name: "Swing Trader",
    description: "Hold for days to weeks",
    preferred_timeframes: &[TimeInterval::OneHour, TimeInterval::FourHours],
    rsi_overbought: 70.0,
    rsi_oversold: 30.0,
    adx_strength_threshold: 25.0,
    risk_tolerance: RiskTolerance::Medium,
};

const INVESTOR: TradingStyleConfig = TradingStyleConfig {
    id: TradingStyle::Investor,
    name: "Investor",
    description: "Long-term holds, fundamental focus",
    preferred_timeframes: &[TimeInterval::FourHours],
    rsi_overbought: 80.0,
    rsi_oversold: 20.0,
    adx_strength_threshold: 30.0,
    risk_tolerance: RiskTolerance::Low,
};

impl TradingStyle {
    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "scalper" | "scalp" => Some(Self::Scalper),
            "daytrader" | "day" | "intraday" => Some(Self::DayTrader),
            "swingtrader" | "swing" => Some(Self::SwingTrader),
            "investor" | "long_term" => Some(Self::Investor),
            _ => None,
        }
    }

    /// Storage/wire identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Scalper => "scalper",
            Self::DayTrader => "daytrader",
            Self::SwingTrader => "swingtrader",
            Self::Investor => "investor",
        }
    }

    /// Thresholds and preferences for this style.
    pub fn config(&self) -> &'static TradingStyleConfig {
        match self {
            Self::Scalper => &SCALPER,
            Self::DayTrader => &DAY_TRADER,
            Self::SwingTrader => &SWING_TRADER,
            Self::Investor => &INVESTOR,
        }
    }

    /// Whether the interval is one this style normally trades on.
    pub fn prefers(&self, interval: TimeInterval) -> bool {
        self.config().preferred_timeframes.contains(&interval)
    }
}

/// Noise/volatility risk of trading on a given interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Extreme,
}

/// Risk level plus the warning shown next to the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeframeRisk {
    pub level: RiskLevel,
    pub warning: String,
}

/// Assess how risky an interval is for the given trading style.
///
/// Intervals outside the style's preferred set get a "Not your typical
/// timeframe." prefix on the warning.
pub fn timeframe_risk(interval: TimeInterval, style: TradingStyle) -> TimeframeRisk {
    let (level, warning) = match interval {
        TimeInterval::OneMinute => (
            RiskLevel::Extreme,
            "Extreme volatility. Noise dominates signal. Only for experienced scalpers with strict stops.",
        ),
        TimeInterval::ThreeMinutes => (
            RiskLevel::High,
            "High noise ratio. False signals common. Use tight stop-losses and quick exits.",
        ),
        TimeInterval::FiveMinutes => (
            RiskLevel::High,
            "Fast-paced action. Whipsaws frequent. Requires constant monitoring.",
        ),
        TimeInterval::FifteenMinutes => (
            RiskLevel::Medium,
            "Moderate volatility. Better signal clarity but still requires active management.",
        ),
        TimeInterval::OneHour => (
            RiskLevel::Medium,
            "Balanced timeframe. Good for trend confirmation but watch for sudden reversals.",
        ),
        TimeInterval::FourHours => (
            RiskLevel::Low,
            "Clearer trends visible. Better for patience-based strategies. Less noise.",
        ),
        TimeInterval::OneDay | TimeInterval::OneWeek => {
            (RiskLevel::Medium, "Standard market conditions apply.")
        }
    };

    let warning = if style.prefers(interval) {
        warning.to_string()
    } else {
        format!("Not your typical timeframe. {}", warning)
    };

    TimeframeRisk { level, warning }
}
