use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use traderpunk::config::Config;
use traderpunk::services::{build_report, load_candles};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "traderpunk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env();
    debug!("Configuration: {:?}", config);

    let path = std::env::args()
        .nth(1)
        .or_else(|| config.candles_path.clone())
        .context("usage: traderpunk <candles.json> (or set CANDLES_PATH)")?;

    let candles = load_candles(&path)?;
    info!(
        "Loaded {} candles for {} from {}",
        candles.len(),
        config.symbol,
        path
    );

    if config.ai_api_url.is_none() {
        info!("AI_API_URL not set, using local signal scoring");
    }

    let report = build_report(&config, &candles).await;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
