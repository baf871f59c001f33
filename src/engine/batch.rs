//! Sequential batch prediction with provider pacing.

use std::time::Duration;

use tracing::info;

use crate::models::prediction::Prediction;
use crate::services::market_data::QuoteProvider;

use super::predictor::PredictionEngine;

impl PredictionEngine {
    /// Predict every symbol in input order.
    ///
    /// Calls are deliberately serialized with `pacing_delay_ms` between
    /// provider fetches — a rate-limiting policy, not a performance concern.
    /// Per-symbol failures land in the output as `Error` entries; one bad
    /// symbol never aborts the batch.
    pub async fn predict_portfolio(
        &self,
        symbols: &[String],
        provider: &dyn QuoteProvider,
    ) -> Vec<Prediction> {
        let delay = Duration::from_millis(self.config.pacing_delay_ms);
        let mut predictions = Vec::with_capacity(symbols.len());

        for (i, symbol) in symbols.iter().enumerate() {
            if i > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            predictions.push(self.predict(symbol, provider).await);
        }

        info!(count = predictions.len(), "portfolio predictions generated");
        predictions
    }
}
