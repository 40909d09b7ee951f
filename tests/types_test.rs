//! Wire format tests for the shared types

use serde_json::json;
use traderpunk::types::*;

#[test]
fn test_candle_parses_from_json() {
    let candle: Candle = serde_json::from_value(json!({
        "time": 1700000000000i64,
        "open": 100.0,
        "high": 105.0,
        "low": 98.0,
        "close": 103.0,
        "volume": 1234.5
    }))
    .unwrap();

    assert_eq!(candle.time, 1_700_000_000_000);
    assert_eq!(candle.range(), 7.0);
    assert!(candle.is_well_formed());
}

#[test]
fn test_candle_well_formed_checks() {
    let good = Candle {
        time: 0,
        open: 10.0,
        high: 12.0,
        low: 9.0,
        close: 11.0,
        volume: 0.0,
    };
    assert!(good.is_well_formed());
    assert!(!Candle { high: 10.5, ..good }.is_well_formed());
    assert!(!Candle { low: 10.5, ..good }.is_well_formed());
    assert!(!Candle { volume: -1.0, ..good }.is_well_formed());
    assert!(!Candle { close: f64::NAN, ..good }.is_well_formed());
}

#[test]
fn test_time_interval_codes() {
    assert_eq!(serde_json::to_value(TimeInterval::OneHour).unwrap(), json!("1h"));
    assert_eq!(
        serde_json::from_value::<TimeInterval>(json!("15m")).unwrap(),
        TimeInterval::FifteenMinutes
    );
    for interval in TimeInterval::SELECTABLE {
        assert_eq!(TimeInterval::from_str(interval.code()), Some(interval));
    }
    assert_eq!(TimeInterval::from_str("2h"), None);
    assert_eq!(TimeInterval::FourHours.duration_ms(), 4 * 3_600_000);
}

#[test]
fn test_adx_point_field_names() {
    let value = serde_json::to_value(AdxPoint {
        adx: 30.0,
        plus_di: 25.0,
        minus_di: 10.0,
    })
    .unwrap();
    assert_eq!(value, json!({"adx": 30.0, "plusDI": 25.0, "minusDI": 10.0}));
}

#[test]
fn test_snapshot_wire_format() {
    let snapshot = IndicatorSnapshot {
        rsi: 61.5,
        macd: MacdPoint {
            macd: 1.5,
            signal: 1.0,
            histogram: 0.5,
        },
        adx: AdxPoint {
            adx: 22.0,
            plus_di: 18.0,
            minus_di: 12.0,
        },
        bop: 0.25,
        obv_trend: ObvTrend::Rising,
    };

    let value = serde_json::to_value(snapshot).unwrap();
    assert_eq!(value["obvTrend"], json!("Rising"));
    assert_eq!(value["macd"]["histogram"], json!(0.5));
    assert_eq!(value["adx"]["plusDI"], json!(18.0));

    let back: IndicatorSnapshot = serde_json::from_value(value).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn test_signal_direction_uppercase() {
    assert_eq!(serde_json::to_value(SignalDirection::Long).unwrap(), json!("LONG"));
    assert_eq!(
        serde_json::from_value::<SignalDirection>(json!("NEUTRAL")).unwrap(),
        SignalDirection::Neutral
    );
    assert!(serde_json::from_value::<SignalDirection>(json!("long")).is_err());
    assert_eq!(
        serde_json::to_value(TradeDirection::Short).unwrap(),
        json!("SHORT")
    );
}

#[test]
fn test_analysis_request_wire_format() {
    let request = AnalysisRequest {
        symbol: "SOLUSDT".to_string(),
        price: 150.0,
        price_change: 3.5,
        timeframe: TimeInterval::FourHours,
        trading_style: TradingStyle::SwingTrader,
        indicators: IndicatorSnapshot::default(),
        fear_greed_index: None,
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["priceChange"], json!(3.5));
    assert_eq!(value["timeframe"], json!("4h"));
    assert_eq!(value["tradingStyle"], json!("swingtrader"));
    assert_eq!(value["indicators"]["rsi"], json!(50.0));
    assert_eq!(value["indicators"]["obvTrend"], json!("Falling"));
}

#[test]
fn test_levels_field_names() {
    let fib = serde_json::to_value(FibonacciLevels::default()).unwrap();
    for key in [
        "high",
        "low",
        "level236",
        "level382",
        "level500",
        "level618",
        "level786",
        "extension1272",
        "extension1618",
    ] {
        assert!(fib.get(key).is_some(), "missing {}", key);
    }

    let pivots = serde_json::to_value(PivotPoints::default()).unwrap();
    for key in ["pivot", "r1", "r2", "r3", "s1", "s2", "s3"] {
        assert!(pivots.get(key).is_some(), "missing {}", key);
    }
}

#[test]
fn test_trading_style_ids() {
    for style in [
        TradingStyle::Scalper,
        TradingStyle::DayTrader,
        TradingStyle::SwingTrader,
        TradingStyle::Investor,
    ] {
        assert_eq!(serde_json::to_value(style).unwrap(), json!(style.id()));
        assert_eq!(TradingStyle::from_str(style.id()), Some(style));
        assert_eq!(style.config().id, style);
    }
    assert_eq!(TradingStyle::default(), TradingStyle::DayTrader);
}

#[test]
fn test_timeframe_risk_for_style() {
    let scalping = timeframe_risk(TimeInterval::OneMinute, TradingStyle::Scalper);
    assert_eq!(scalping.level, RiskLevel::Extreme);
    assert!(!scalping.warning.starts_with("Not your typical timeframe."));

    let investing = timeframe_risk(TimeInterval::OneMinute, TradingStyle::Investor);
    assert_eq!(investing.level, RiskLevel::Extreme);
    assert!(investing.warning.starts_with("Not your typical timeframe. "));
}
