//! Remote analyzer tests against a local HTTP responder

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

use traderpunk::services::{
    analyze_with_fallback, fallback_trade_idea, trade_idea_with_fallback, RemoteAnalyzer,
    SignalAnalyzer,
};
use traderpunk::types::*;
use traderpunk::AppError;

/// Log everything so `warn!` and `debug!` arguments are actually formatted.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Local server answering every request with the same status and body.
struct Responder {
    base_url: String,
    requests: mpsc::UnboundedReceiver<String>,
}

impl Responder {
    async fn start(status: &'static str, body: impl Into<String>) -> Self {
        let body = body.into();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let request = read_request(&mut socket).await;
                let _ = tx.send(request);

                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            requests: rx,
        }
    }

    fn analyzer(&self) -> RemoteAnalyzer {
        RemoteAnalyzer::new(&self.base_url, Duration::from_secs(5))
    }

    async fn next_request(&mut self) -> String {
        self.requests.recv().await.unwrap()
    }
}

/// Read one HTTP request: headers plus a `Content-Length` body.
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_string();
            let length = head
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).to_string()
}

fn request() -> AnalysisRequest {
    AnalysisRequest {
        symbol: "BTCUSDT".to_string(),
        price: 64000.0,
        price_change: 2.1,
        timeframe: TimeInterval::OneHour,
        trading_style: TradingStyle::DayTrader,
        indicators: IndicatorSnapshot::default(),
        fear_greed_index: None,
    }
}

fn idea_request() -> TradeIdeaRequest {
    TradeIdeaRequest {
        symbol: "BTCUSDT".to_string(),
        price: 64000.0,
        timeframe: TimeInterval::OneHour,
        trading_style: TradingStyle::DayTrader,
        indicators: IndicatorSnapshot::default(),
        pivot_points: PivotPoints::default(),
        fibonacci: FibonacciLevels::default(),
        fear_greed_index: None,
    }
}

#[tokio::test]
async fn test_error_body_with_multibyte_char_falls_back() {
    init_tracing();
    // byte 200 lands inside the three-byte euro sign
    let body = format!("{}€ upstream exploded", "x".repeat(199));
    let mut server = Responder::start("502 Bad Gateway", body).await;
    let remote = server.analyzer();

    let result = analyze_with_fallback(Some(&remote), &request()).await;
    assert_eq!(result.source, AnalysisSource::Local);
    assert!(server.next_request().await.starts_with("POST /api/analyze "));

    let idea = trade_idea_with_fallback(Some(&remote), &idea_request()).await;
    assert_eq!(idea, fallback_trade_idea(64000.0));
    assert!(server.next_request().await.starts_with("POST /api/trade-idea "));
}

#[tokio::test]
async fn test_error_status_is_external_api() {
    init_tracing();
    let server = Responder::start("503 Service Unavailable", r#"{"error":"busy"}"#).await;

    let err = server.analyzer().analyze(&request()).await.unwrap_err();
    match err {
        AppError::ExternalApi(message) => {
            assert!(message.contains("503"), "{}", message);
            assert!(message.contains("/api/analyze"), "{}", message);
        }
        other => panic!("expected ExternalApi, got {:?}", other),
    }
}

#[tokio::test]
async fn test_success_body_decodes_with_defaults() {
    init_tracing();
    let body = r#"{
        "signal": "LONG",
        "confidence": 0,
        "longConfidence": 81.4,
        "summary": "Bulls pushing",
        "technicalAnalysis": "Trend intact",
        "keyConsiderations": ["Funding neutral"]
    }"#;
    let mut server = Responder::start("200 OK", body).await;
    let remote = server.analyzer();

    let result = remote.analyze(&request()).await.unwrap();
    assert_eq!(result.signal, SignalDirection::Long);
    assert_eq!(result.source, AnalysisSource::Remote);
    assert_eq!(result.long_confidence, 81);
    assert_eq!(result.short_confidence, 50);
    assert_eq!(result.confidence, 81);
    assert_eq!(result.summary, "Bulls pushing");
    assert_eq!(result.sentiment_analysis, "");
    assert_eq!(result.key_considerations, vec!["Funding neutral"]);
    assert!(result.risk_warning.is_none());

    let sent = server.next_request().await;
    assert!(sent.starts_with("POST /api/analyze "));
    assert!(sent.contains(r#""obvTrend":"Falling""#));
    assert!(sent.contains(r#""tradingStyle":"daytrader""#));
    assert!(sent.contains(r#""timeframe":"1h""#));

    let via_fallback = analyze_with_fallback(Some(&remote), &request()).await;
    assert_eq!(via_fallback.source, AnalysisSource::Remote);
}

#[tokio::test]
async fn test_undecodable_success_body_falls_back() {
    init_tracing();
    let server = Responder::start("200 OK", "<html>maintenance</html>").await;
    let remote = server.analyzer();

    let err = remote.analyze(&request()).await.unwrap_err();
    assert!(matches!(err, AppError::Reqwest(_)), "{:?}", err);

    let result = analyze_with_fallback(Some(&remote), &request()).await;
    assert_eq!(result.source, AnalysisSource::Local);
}

#[tokio::test]
async fn test_trade_idea_decodes() {
    init_tracing();
    let body = r#"{
        "direction": "SHORT",
        "entryPrice": 64000.0,
        "stopLoss": 65920.0,
        "takeProfit1": 62720.0,
        "takeProfit2": 61440.0,
        "takeProfit3": 60160.0,
        "riskRewardRatio": "1:2.5",
        "confidence": 140,
        "qualityScore": 0,
        "reasoning": "Rejected at R1",
        "keyLevels": ["R1 65,000"],
        "finalVerdict": "SKIP IT."
    }"#;
    let mut server = Responder::start("200 OK", body).await;

    let idea = server.analyzer().trade_idea(&idea_request()).await.unwrap();
    assert_eq!(idea.direction, TradeDirection::Short);
    assert_eq!(idea.source, AnalysisSource::Remote);
    assert_eq!(idea.stop_loss, 65920.0);
    assert_eq!(idea.confidence, 100.0);
    assert_eq!(idea.quality_score, 1);
    assert_eq!(idea.risk_reward_ratio, "1:2.5");
    assert_eq!(idea.final_verdict.as_deref(), Some("SKIP IT."));
    assert!(idea.warnings.is_empty());

    let sent = server.next_request().await;
    assert!(sent.starts_with("POST /api/trade-idea "));
    assert!(sent.contains(r#""pivotPoints""#));
    assert!(sent.contains(r#""fibonacci""#));
}
