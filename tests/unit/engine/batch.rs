//! Unit tests for sequential batch prediction

use foliotrack::config::Config;
use foliotrack::engine::PredictionEngine;
use foliotrack::models::prediction::Signal;
use foliotrack::services::market_data::ScriptedQuoteProvider;

fn test_config() -> Config {
    Config {
        pacing_delay_ms: 0,
        ..Config::default()
    }
}

fn rising_series(count: usize) -> Vec<f64> {
    (0..count).map(|i| 100.0 + i as f64).collect()
}

#[tokio::test]
async fn test_batch_preserves_input_order() {
    let provider = ScriptedQuoteProvider::new();
    provider.set_history("AAPL", rising_series(30)).await;
    provider.set_history("MSFT", rising_series(30)).await;

    let engine = PredictionEngine::new(test_config());
    let symbols = vec!["MSFT".to_string(), "AAPL".to_string()];
    let predictions = engine.predict_portfolio(&symbols, &provider).await;

    assert_eq!(predictions.len(), 2);
    assert_eq!(predictions[0].symbol, "MSFT");
    assert_eq!(predictions[1].symbol, "AAPL");
}

#[tokio::test]
async fn test_one_failure_does_not_abort_batch() {
    let provider = ScriptedQuoteProvider::new();
    provider.fail_symbol("A").await;
    provider.set_history("B", rising_series(30)).await;

    let engine = PredictionEngine::new(test_config());
    let symbols = vec!["A".to_string(), "B".to_string()];
    let predictions = engine.predict_portfolio(&symbols, &provider).await;

    assert_eq!(predictions.len(), 2);
    assert_eq!(predictions[0].prediction, Signal::Error);
    assert_eq!(predictions[0].confidence, 0);
    assert!(predictions[0].error.is_some());

    assert_ne!(predictions[1].prediction, Signal::Error);
    assert!(predictions[1].current_price.is_some());
}

#[tokio::test]
async fn test_unknown_symbol_is_error_entry() {
    let provider = ScriptedQuoteProvider::new();
    let engine = PredictionEngine::new(test_config());
    let predictions = engine
        .predict_portfolio(&["GHOST".to_string()], &provider)
        .await;

    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0].prediction, Signal::Error);
}

#[tokio::test]
async fn test_short_history_is_insufficient_data() {
    let provider = ScriptedQuoteProvider::new();
    provider.set_history("NEW", rising_series(10)).await;

    let engine = PredictionEngine::new(test_config());
    let predictions = engine
        .predict_portfolio(&["NEW".to_string()], &provider)
        .await;

    assert_eq!(predictions[0].prediction, Signal::InsufficientData);
    assert_eq!(predictions[0].confidence, 0);
}

#[tokio::test]
async fn test_empty_symbol_list() {
    let provider = ScriptedQuoteProvider::new();
    let engine = PredictionEngine::new(test_config());
    let predictions = engine.predict_portfolio(&[], &provider).await;
    assert!(predictions.is_empty());
}
