pub mod analyzer;
pub mod report;
pub mod signals;

pub use analyzer::{
    analyze_with_fallback, trade_idea_with_fallback, LocalAnalyzer, RemoteAnalyzer,
    SignalAnalyzer,
};
pub use report::{build_report, load_candles, ChartReport};
pub use signals::{
    calculate_indicators, fallback_trade_idea, fibonacci_levels, local_trade_idea, pivot_points,
    score_snapshot, Indicator, SignalScore,
};
