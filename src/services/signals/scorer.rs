//! Rule-based signal scorer.
//!
//! Starts both sides at 50, applies a fixed ordered table of threshold rules
//! to the latest indicator values, clamps, and calls a side only when it leads
//! the other by more than [`DECISION_MARGIN`] points.

use serde::{Deserialize, Serialize};

use crate::types::{IndicatorSnapshot, SignalDirection};

const BASE_SCORE: i32 = 50;
const MIN_SCORE: i32 = 5;
const MAX_SCORE: i32 = 95;

/// Lead one side needs over the other before the signal leaves NEUTRAL.
pub const DECISION_MARGIN: i32 = 15;

/// Points added to each side by one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Adjustment {
    long: i32,
    short: i32,
}

impl Adjustment {
    const NONE: Adjustment = Adjustment { long: 0, short: 0 };

    const fn new(long: i32, short: i32) -> Self {
        Self { long, short }
    }
}

/// The scoring rules, applied in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    RsiZone,
    MacdHistogram,
    DirectionalIndex,
    BalanceOfPower,
}

const RULES: [Rule; 4] = [
    Rule::RsiZone,
    Rule::MacdHistogram,
    Rule::DirectionalIndex,
    Rule::BalanceOfPower,
];

impl Rule {
    fn adjustment(self, snapshot: &IndicatorSnapshot) -> Adjustment {
        match self {
            Rule::RsiZone => {
                let rsi = snapshot.rsi;
                if rsi < 30.0 {
                    Adjustment::new(20, -15)
                } else if rsi < 40.0 {
                    Adjustment::new(10, -5)
                } else if rsi > 70.0 {
                    Adjustment::new(-15, 20)
                } else if rsi > 60.0 {
                    Adjustment::new(-5, 10)
                } else {
                    Adjustment::NONE
                }
            }
            Rule::MacdHistogram => {
                let histogram = snapshot.macd.histogram;
                if histogram > 0.0 {
                    Adjustment::new(10, -5)
                } else if histogram < 0.0 {
                    Adjustment::new(-5, 10)
                } else {
                    Adjustment::NONE
                }
            }
            Rule::DirectionalIndex => {
                let adx = snapshot.adx;
                if adx.plus_di > adx.minus_di {
                    Adjustment::new(10, -5)
                } else if adx.minus_di > adx.plus_di {
                    Adjustment::new(-5, 10)
                } else {
                    Adjustment::NONE
                }
            }
            Rule::BalanceOfPower => {
                if snapshot.bop > 0.3 {
                    Adjustment::new(5, 0)
                } else if snapshot.bop < -0.3 {
                    Adjustment::new(0, 5)
                } else {
                    Adjustment::NONE
                }
            }
        }
    }
}

/// Output of [`score_snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalScore {
    pub signal: SignalDirection,
    pub long_confidence: u8,
    pub short_confidence: u8,
    /// Larger of the two side confidences.
    pub confidence: u8,
}

/// Score the latest indicator values into a LONG/SHORT/NEUTRAL call.
pub fn score_snapshot(snapshot: &IndicatorSnapshot) -> SignalScore {
    let (long, short) = RULES.iter().fold((BASE_SCORE, BASE_SCORE), |(long, short), rule| {
        let adj = rule.adjustment(snapshot);
        (long + adj.long, short + adj.short)
    });

    let long = long.clamp(MIN_SCORE, MAX_SCORE);
    let short = short.clamp(MIN_SCORE, MAX_SCORE);

    let signal = if long > short + DECISION_MARGIN {
        SignalDirection::Long
    } else if short > long + DECISION_MARGIN {
        SignalDirection::Short
    } else {
        SignalDirection::Neutral
    };

    // clamped to 5..=95, always fits
    let long_confidence = long as u8;
    let short_confidence = short as u8;

    SignalScore {
        signal,
        long_confidence,
        short_confidence,
        confidence: long_confidence.max(short_confidence),
    }
}
