//! Local trade idea used when the remote analyzer cannot be reached.

use crate::types::{AnalysisSource, IndicatorSnapshot, TradeDirection, TradeIdea};

const STOP_LOSS_PCT: f64 = 0.03;
const TAKE_PROFIT_PCTS: [f64; 3] = [0.02, 0.04, 0.06];

/// Build a fixed-percentage setup around `price`.
///
/// Goes long when RSI is below 50, short otherwise. Stop is 3% against the
/// position, targets 2/4/6% in its favour.
pub fn local_trade_idea(price: f64, snapshot: &IndicatorSnapshot) -> TradeIdea {
    let rsi = snapshot.rsi;
    let is_long = rsi < 50.0;
    let side = if is_long { 1.0 } else { -1.0 };

    let stop_loss = price * (1.0 - side * STOP_LOSS_PCT);
    let [take_profit1, take_profit2, take_profit3] =
        TAKE_PROFIT_PCTS.map(|pct| price * (1.0 + side * pct));

    TradeIdea {
        direction: if is_long {
            TradeDirection::Long
        } else {
            TradeDirection::Short
        },
        entry_price: price,
        stop_loss,
        take_profit1,
        take_profit2,
        take_profit3,
        risk_reward_ratio: "1:2".to_string(),
        confidence: (rsi - 50.0).abs() + 30.0,
        quality_score: 2,
        quality_factors: vec![
            "Local analysis only".to_string(),
            "Based on RSI and price action".to_string(),
            "No AI validation available".to_string(),
        ],
        reasoning: format!(
            "Local trade idea based on RSI({:.1}). Connect to server for AI-powered trade ideas with social sentiment.",
            rsi
        ),
        key_levels: vec![
            format!("Entry: ${:.2}", price),
            format!("Stop: ${:.2}", stop_loss),
        ],
        warnings: vec![
            "Local analysis only - no AI validation".to_string(),
            "Verify with your own research".to_string(),
        ],
        final_verdict: None,
        source: AnalysisSource::Local,
    }
}

/// Placeholder setup returned when the remote trade idea request fails.
///
/// Always LONG at `price` with the same 3% stop and 2/4/6% targets, a flat
/// confidence of 50 and quality 3.
pub fn fallback_trade_idea(price: f64) -> TradeIdea {
    let [take_profit1, take_profit2, take_profit3] =
        TAKE_PROFIT_PCTS.map(|pct| price * (1.0 + pct));

    TradeIdea {
        direction: TradeDirection::Long,
        entry_price: price,
        stop_loss: price * (1.0 - STOP_LOSS_PCT),
        take_profit1,
        take_profit2,
        take_profit3,
        risk_reward_ratio: "1:2".to_string(),
        confidence: 50.0,
        quality_score: 3,
        quality_factors: vec!["Unable to fully analyze".to_string()],
        reasoning: "Trade circuits overloaded. Try again, punk.".to_string(),
        key_levels: vec!["Check price action manually".to_string()],
        warnings: vec!["System error - verify levels independently".to_string()],
        final_verdict: None,
        source: AnalysisSource::Local,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_rsi(rsi: f64) -> IndicatorSnapshot {
        IndicatorSnapshot {
            rsi,
            ..IndicatorSnapshot::default()
        }
    }

    #[test]
    fn test_oversold_goes_long() {
        let idea = local_trade_idea(100.0, &with_rsi(20.0));
        assert_eq!(idea.direction, TradeDirection::Long);
        assert!((idea.stop_loss - 97.0).abs() < 1e-9);
        assert!((idea.take_profit1 - 102.0).abs() < 1e-9);
        assert!((idea.take_profit3 - 106.0).abs() < 1e-9);
        assert_eq!(idea.confidence, 60.0);
        assert_eq!(idea.key_levels, vec!["Entry: $100.00", "Stop: $97.00"]);
    }

    #[test]
    fn test_neutral_rsi_goes_short() {
        let idea = local_trade_idea(200.0, &with_rsi(50.0));
        assert_eq!(idea.direction, TradeDirection::Short);
        assert!((idea.stop_loss - 206.0).abs() < 1e-9);
        assert!((idea.take_profit2 - 192.0).abs() < 1e-9);
        assert_eq!(idea.confidence, 30.0);
        assert_eq!(idea.source, AnalysisSource::Local);
    }

    #[test]
    fn test_fallback_ignores_indicators() {
        let idea = fallback_trade_idea(100.0);
        assert_eq!(idea.direction, TradeDirection::Long);
        assert_eq!(idea.entry_price, 100.0);
        assert!((idea.stop_loss - 97.0).abs() < 1e-9);
        assert!((idea.take_profit2 - 104.0).abs() < 1e-9);
        assert_eq!(idea.confidence, 50.0);
        assert_eq!(idea.quality_score, 3);
        assert_eq!(idea.reasoning, "Trade circuits overloaded. Try again, punk.");
        assert_eq!(idea.key_levels, vec!["Check price action manually"]);
    }
}
