//! Signal analyzers.
//!
//! The remote AI collaborator and the in-process rule-based scorer implement
//! the same [`SignalAnalyzer`] trait. Callers pick the remote one when it is
//! configured and use [`analyze_with_fallback`] to drop back to local scoring
//! whenever it is missing or fails.

use std::future::{ready, Future};
use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::services::signals::{fallback_trade_idea, local_trade_idea, score_snapshot};
use crate::types::{
    AnalysisRequest, AnalysisSource, SignalDirection, SignalResult, TradeDirection, TradeIdea,
    TradeIdeaRequest,
};

/// Something that can turn an indicator snapshot into a trading signal.
pub trait SignalAnalyzer: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Analyze the request. An `Err` means the analyzer is unavailable.
    fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> impl Future<Output = Result<SignalResult>> + Send;
}

/// Analyzer backed by the rule-based scorer. Always available.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAnalyzer;

impl LocalAnalyzer {
    /// Score the request's snapshot and render the narrative fields.
    pub fn evaluate(&self, request: &AnalysisRequest) -> SignalResult {
        let snapshot = &request.indicators;
        let score = score_snapshot(snapshot);

        let rsi = snapshot.rsi;
        let macd = snapshot.macd;
        let adx = snapshot.adx;
        let bop = snapshot.bop;

        let rsi_zone = if rsi > 70.0 {
            "overbought"
        } else if rsi < 30.0 {
            "oversold"
        } else {
            "neutral"
        };
        let trend_dir = if adx.plus_di > adx.minus_di {
            "bullish"
        } else {
            "bearish"
        };
        let verdict = match score.signal {
            SignalDirection::Long => "Leaning bullish, punk.",
            SignalDirection::Short => "Bears in control, stay sharp.",
            SignalDirection::Neutral => "Mixed signals, wait for clarity.",
        };

        let summary = format!(
            "Local analysis for {}: RSI at {:.1} ({}), MACD histogram {}, ADX shows {} pressure. {}",
            request.symbol,
            rsi,
            rsi_zone,
            if macd.histogram > 0.0 { "positive" } else { "negative" },
            trend_dir,
            verdict
        );

        let technical_analysis = format!(
            "RSI(14) at {:.2} is in {} territory. MACD histogram at {:.4} is {}. ADX at {:.1} with +DI({:.1}) {} -DI({:.1}) confirms {} trend. Balance of Power at {:.3} shows {} pressure.",
            rsi,
            rsi_zone,
            macd.histogram,
            if macd.histogram > 0.0 { "expanding bullish" } else { "bearish" },
            adx.adx,
            adx.plus_di,
            if adx.plus_di > adx.minus_di { ">" } else { "<" },
            adx.minus_di,
            trend_dir,
            bop,
            if bop > 0.0 { "buying" } else { "selling" }
        );

        let rsi_note = match rsi_zone {
            "overbought" => "watch for reversal",
            "oversold" => "potential bounce zone",
            _ => "no extreme readings",
        };
        let mut trend_label = trend_dir.to_string();
        trend_label[..1].make_ascii_uppercase();

        SignalResult {
            id: Uuid::new_v4(),
            signal: score.signal,
            confidence: score.confidence,
            long_confidence: score.long_confidence,
            short_confidence: score.short_confidence,
            summary,
            technical_analysis,
            sentiment_analysis: "AI backend offline - showing local indicator analysis only. Connect to server for full AI-powered sentiment analysis.".to_string(),
            key_considerations: vec![
                format!("RSI at {:.1} - {}", rsi, rsi_note),
                format!(
                    "MACD {} signal line",
                    if macd.macd > macd.signal { "above" } else { "below" }
                ),
                format!(
                    "ADX trend strength: {} ({:.1})",
                    if adx.adx > 25.0 { "strong" } else { "weak" },
                    adx.adx
                ),
                format!("{} directional pressure", trend_label),
            ],
            risk_warning: Some(
                "Local analysis only - connect to server for full AI analysis with social sentiment."
                    .to_string(),
            ),
            source: AnalysisSource::Local,
            generated_at: Utc::now().timestamp_millis(),
        }
    }
}

impl SignalAnalyzer for LocalAnalyzer {
    fn name(&self) -> &str {
        "local"
    }

    fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> impl Future<Output = Result<SignalResult>> + Send {
        ready(Ok(self.evaluate(request)))
    }
}

/// AI analysis payload as returned by the remote collaborator.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteAnalysis {
    signal: SignalDirection,
    confidence: Option<f64>,
    long_confidence: Option<f64>,
    short_confidence: Option<f64>,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    technical_analysis: String,
    #[serde(default)]
    sentiment_analysis: String,
    #[serde(default)]
    key_considerations: Vec<String>,
    risk_warning: Option<String>,
}

/// Characters of an error response body kept in the log line.
const ERROR_BODY_LOG_CHARS: usize = 200;

/// First `max_chars` characters of `text`, never splitting a UTF-8 sequence.
fn truncate_body(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

fn to_percent(value: f64) -> u8 {
    if value.is_finite() {
        value.round().clamp(0.0, 100.0) as u8
    } else {
        0
    }
}

impl RemoteAnalysis {
    /// Fill in missing confidences: sides default to 50 and a missing or zero
    /// overall confidence becomes the larger side.
    fn into_result(self) -> SignalResult {
        let long_confidence = to_percent(self.long_confidence.unwrap_or(50.0));
        let short_confidence = to_percent(self.short_confidence.unwrap_or(50.0));
        let confidence = match self.confidence.map(to_percent) {
            Some(c) if c > 0 => c,
            _ => long_confidence.max(short_confidence),
        };

        SignalResult {
            id: Uuid::new_v4(),
            signal: self.signal,
            confidence,
            long_confidence,
            short_confidence,
            summary: self.summary,
            technical_analysis: self.technical_analysis,
            sentiment_analysis: self.sentiment_analysis,
            key_considerations: self.key_considerations,
            risk_warning: self.risk_warning,
            source: AnalysisSource::Remote,
            generated_at: Utc::now().timestamp_millis(),
        }
    }
}

/// Trade idea payload as returned by the remote collaborator.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteTradeIdea {
    direction: TradeDirection,
    entry_price: f64,
    stop_loss: f64,
    take_profit1: f64,
    take_profit2: f64,
    take_profit3: f64,
    #[serde(default)]
    risk_reward_ratio: String,
    #[serde(default)]
    confidence: f64,
    #[serde(default)]
    quality_score: u8,
    #[serde(default)]
    quality_factors: Vec<String>,
    #[serde(default)]
    reasoning: String,
    #[serde(default)]
    key_levels: Vec<String>,
    #[serde(default)]
    warnings: Vec<String>,
    final_verdict: Option<String>,
}

impl RemoteTradeIdea {
    fn into_trade_idea(self) -> TradeIdea {
        TradeIdea {
            direction: self.direction,
            entry_price: self.entry_price,
            stop_loss: self.stop_loss,
            take_profit1: self.take_profit1,
            take_profit2: self.take_profit2,
            take_profit3: self.take_profit3,
            risk_reward_ratio: self.risk_reward_ratio,
            confidence: self.confidence.clamp(0.0, 100.0),
            quality_score: self.quality_score.clamp(1, 5),
            quality_factors: self.quality_factors,
            reasoning: self.reasoning,
            key_levels: self.key_levels,
            warnings: self.warnings,
            final_verdict: self.final_verdict,
            source: AnalysisSource::Remote,
        }
    }
}

/// HTTP client for the remote AI analysis service.
#[derive(Clone)]
pub struct RemoteAnalyzer {
    client: Client,
    base_url: String,
}

impl RemoteAnalyzer {
    /// Create a client for the service at `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent("TraderPunk/1.0")
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let request_start = std::time::Instant::now();
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    AppError::AnalyzerUnavailable(format!("{}: {}", self.base_url, e))
                } else {
                    AppError::Reqwest(e)
                }
            })?;
        let latency_ms = request_start.elapsed().as_millis() as u64;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(
                "Analysis API returned {}: {}",
                status,
                truncate_body(&text, ERROR_BODY_LOG_CHARS)
            );
            return Err(AppError::ExternalApi(format!("HTTP {} from {}", status, path)));
        }

        debug!("{} answered in {}ms", path, latency_ms);
        Ok(response.json().await?)
    }

    /// Ask the remote service for a concrete trade setup.
    pub async fn trade_idea(&self, request: &TradeIdeaRequest) -> Result<TradeIdea> {
        let idea: RemoteTradeIdea = self.post("/api/trade-idea", request).await?;
        Ok(idea.into_trade_idea())
    }
}

impl SignalAnalyzer for RemoteAnalyzer {
    fn name(&self) -> &str {
        "remote"
    }

    fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> impl Future<Output = Result<SignalResult>> + Send {
        async move {
            let analysis: RemoteAnalysis = self.post("/api/analyze", request).await?;
            Ok(analysis.into_result())
        }
    }
}

/// Analyze with `primary` if given, falling back to [`LocalAnalyzer`] when it
/// is absent or fails. Never fails.
pub async fn analyze_with_fallback<A: SignalAnalyzer>(
    primary: Option<&A>,
    request: &AnalysisRequest,
) -> SignalResult {
    let Some(analyzer) = primary else {
        debug!("No remote analyzer configured, scoring {} locally", request.symbol);
        return LocalAnalyzer.evaluate(request);
    };

    match analyzer.analyze(request).await {
        Ok(result) => {
            info!(
                "{} analysis for {}: {} ({}%)",
                analyzer.name(),
                request.symbol,
                result.signal.label(),
                result.confidence
            );
            result
        }
        Err(e) => {
            warn!(
                "{} analyzer unavailable for {}: {}. Using local scorer",
                analyzer.name(),
                request.symbol,
                e
            );
            LocalAnalyzer.evaluate(request)
        }
    }
}

/// Fetch a remote trade idea. Without a remote service the RSI-based
/// [`local_trade_idea`] is used; a failed request yields the fixed
/// [`fallback_trade_idea`] placeholder.
pub async fn trade_idea_with_fallback(
    remote: Option<&RemoteAnalyzer>,
    request: &TradeIdeaRequest,
) -> TradeIdea {
    let Some(remote) = remote else {
        return local_trade_idea(request.price, &request.indicators);
    };

    match remote.trade_idea(request).await {
        Ok(idea) => idea,
        Err(e) => {
            warn!("Trade idea request for {} failed: {}", request.symbol, e);
            fallback_trade_idea(request.price)
        }
    }
}
