use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{FibonacciLevels, IndicatorSnapshot, PivotPoints, TimeInterval, TradingStyle};

/// Overall call produced by an analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalDirection {
    Long,
    Short,
    Neutral,
}

impl SignalDirection {
    /// Get display label for this direction.
    pub fn label(&self) -> &'static str {
        match self {
            SignalDirection::Long => "LONG",
            SignalDirection::Short => "SHORT",
            SignalDirection::Neutral => "NEUTRAL",
        }
    }
}

/// Side of a trade idea. Trade ideas never come back neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeDirection {
    Long,
    Short,
}

/// Which analyzer produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    /// Rule-based scorer running in-process.
    Local,
    /// The remote AI collaborator.
    Remote,
}

/// Crypto Fear & Greed reading passed along to the remote analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FearGreed {
    pub value: u8,
    pub classification: String,
}

/// Everything an analyzer gets to look at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub symbol: String,
    pub price: f64,
    /// 24h change in percent.
    pub price_change: f64,
    pub timeframe: TimeInterval,
    pub trading_style: TradingStyle,
    pub indicators: IndicatorSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fear_greed_index: Option<FearGreed>,
}

/// Trade idea request: the analysis inputs plus the level snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeIdeaRequest {
    pub symbol: String,
    pub price: f64,
    pub timeframe: TimeInterval,
    pub trading_style: TradingStyle,
    pub indicators: IndicatorSnapshot,
    pub pivot_points: PivotPoints,
    pub fibonacci: FibonacciLevels,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fear_greed_index: Option<FearGreed>,
}

/// Signal plus split long/short confidence and the supporting narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalResult {
    pub id: Uuid,
    pub signal: SignalDirection,
    /// Larger of the two side confidences (0-100).
    pub confidence: u8,
    pub long_confidence: u8,
    pub short_confidence: u8,
    pub summary: String,
    pub technical_analysis: String,
    pub sentiment_analysis: String,
    #[serde(default)]
    pub key_considerations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_warning: Option<String>,
    pub source: AnalysisSource,
    /// Unix timestamp (milliseconds) when produced.
    pub generated_at: i64,
}

/// A concrete entry/stop/target setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeIdea {
    pub direction: TradeDirection,
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit1: f64,
    pub take_profit2: f64,
    pub take_profit3: f64,
    pub risk_reward_ratio: String,
    pub confidence: f64,
    /// 1 (poor) to 5 (excellent).
    pub quality_score: u8,
    #[serde(default)]
    pub quality_factors: Vec<String>,
    pub reasoning: String,
    #[serde(default)]
    pub key_levels: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_verdict: Option<String>,
    pub source: AnalysisSource,
}
