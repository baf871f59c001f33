//! Demo driver: seeds a scripted quote provider and an in-memory store,
//! refreshes prices, and prints the portfolio summary and predictions.

use std::sync::Arc;

use foliotrack::config::Config;
use foliotrack::engine::PredictionEngine;
use foliotrack::portfolio::refresh::PriceRefresher;
use foliotrack::portfolio::store::{InMemoryPositionStore, PositionStore};
use foliotrack::portfolio::summary::summarize;
use foliotrack::services::market_data::ScriptedQuoteProvider;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    foliotrack::logging::init_logging();

    let mut config = Config::from_env();
    config.pacing_delay_ms = 0; // demo data is local, no rate limit to respect

    let provider = Arc::new(ScriptedQuoteProvider::new());
    provider
        .set_history("AAPL", linear_series(150.0, 1.0, 30))
        .await;
    provider
        .set_history("MSFT", linear_series(340.0, -0.8, 30))
        .await;

    let store = Arc::new(InMemoryPositionStore::new());
    let refresher = PriceRefresher::new(provider.clone(), store.clone(), &config);

    refresher.add_position("AAPL", 10.0, 152.5).await?;
    refresher.add_position("MSFT", 5.0, 345.0).await?;
    refresher.refresh_all().await;

    let positions = store.list().await;
    let summary = summarize(&positions);
    info!(
        total_value = summary.total_value,
        total_gain = summary.total_gain,
        "portfolio summary"
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);

    let engine = PredictionEngine::new(config);
    let symbols: Vec<String> = positions.iter().map(|p| p.symbol.clone()).collect();
    for prediction in engine.predict_portfolio(&symbols, provider.as_ref()).await {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    }

    Ok(())
}

fn linear_series(start: f64, step: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| start + step * i as f64).collect()
}
