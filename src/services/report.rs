//! Full chart analysis: every series, level snapshot and signal for one
//! candle sequence.

use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::services::analyzer::{analyze_with_fallback, trade_idea_with_fallback, RemoteAnalyzer};
use crate::services::signals::{calculate_indicators, fibonacci_levels, pivot_points};
use crate::types::{
    timeframe_risk, AnalysisRequest, Candle, FibonacciLevels, IndicatorData, IndicatorSnapshot,
    PivotPoints, SignalResult, TimeInterval, TimeframeRisk, TradeIdea, TradeIdeaRequest,
    TradingStyle,
};

/// Everything the chart screen shows for one symbol.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartReport {
    pub symbol: String,
    pub timeframe: TimeInterval,
    pub trading_style: TradingStyle,
    pub candle_count: usize,
    pub price: f64,
    pub indicators: IndicatorData,
    pub snapshot: IndicatorSnapshot,
    pub pivot_points: PivotPoints,
    pub fibonacci: FibonacciLevels,
    pub timeframe_risk: TimeframeRisk,
    pub analysis: SignalResult,
    pub trade_idea: TradeIdea,
}

/// Read a JSON array of candles, oldest first.
pub fn load_candles(path: impl AsRef<Path>) -> Result<Vec<Candle>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let candles: Vec<Candle> = serde_json::from_str(&raw)
        .map_err(|e| AppError::InvalidInput(format!("{}: {}", path.display(), e)))?;

    let malformed = candles.iter().filter(|c| !c.is_well_formed()).count();
    if malformed > 0 {
        warn!(
            "{} of {} candles in {} violate OHLC invariants",
            malformed,
            candles.len(),
            path.display()
        );
    }

    Ok(candles)
}

/// Keep only the most recent `limit` candles.
pub fn most_recent(candles: &[Candle], limit: usize) -> &[Candle] {
    &candles[candles.len().saturating_sub(limit)..]
}

/// Percent change from the first to the last close, 0 when undefined.
pub fn price_change_pct(candles: &[Candle]) -> f64 {
    match (candles.first(), candles.last()) {
        (Some(first), Some(last)) if first.close != 0.0 => {
            (last.close - first.close) / first.close * 100.0
        }
        _ => 0.0,
    }
}

/// Compute the full report, asking the remote analyzer when one is configured.
pub async fn build_report(config: &Config, candles: &[Candle]) -> ChartReport {
    let candles = most_recent(candles, config.candle_limit);
    let price = candles.last().map(|c| c.close).unwrap_or(0.0);

    let indicators = calculate_indicators(candles);
    let snapshot = IndicatorSnapshot::latest(&indicators);
    let pivots = pivot_points(candles);
    let fibonacci = fibonacci_levels(candles);

    let remote = config
        .ai_api_url
        .as_deref()
        .map(|url| RemoteAnalyzer::new(url, config.ai_timeout()));

    let request = AnalysisRequest {
        symbol: config.symbol.clone(),
        price,
        price_change: price_change_pct(candles),
        timeframe: config.timeframe,
        trading_style: config.trading_style,
        indicators: snapshot,
        fear_greed_index: None,
    };
    let analysis = analyze_with_fallback(remote.as_ref(), &request).await;

    let idea_request = TradeIdeaRequest {
        symbol: config.symbol.clone(),
        price,
        timeframe: config.timeframe,
        trading_style: config.trading_style,
        indicators: snapshot,
        pivot_points: pivots,
        fibonacci,
        fear_greed_index: None,
    };
    let trade_idea = trade_idea_with_fallback(remote.as_ref(), &idea_request).await;

    info!(
        "{} {}: {} candles, {} (long {} / short {})",
        config.symbol,
        config.timeframe.code(),
        candles.len(),
        analysis.signal.label(),
        analysis.long_confidence,
        analysis.short_confidence
    );

    ChartReport {
        symbol: config.symbol.clone(),
        timeframe: config.timeframe,
        trading_style: config.trading_style,
        candle_count: candles.len(),
        price,
        indicators,
        snapshot,
        pivot_points: pivots,
        fibonacci,
        timeframe_risk: timeframe_risk(config.timeframe, config.trading_style),
        analysis,
        trade_idea,
    }
}
