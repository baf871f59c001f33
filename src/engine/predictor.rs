//! Per-symbol heuristic prediction from historical closes.

use chrono::Utc;
use tracing::{debug, warn};

use crate::config::Config;
use crate::indicators::{calculate_macd, calculate_rsi, calculate_sma, calculate_volatility};
use crate::models::indicators::IndicatorReadout;
use crate::models::prediction::{Prediction, Signal};
use crate::services::market_data::QuoteProvider;

/// Minimum number of closes before a prediction is attempted (the MACD slow
/// window).
pub const MIN_HISTORY: usize = 26;

/// Maximum confidence the heuristic can report.
pub const MAX_CONFIDENCE: u8 = 95;

/// Stateless prediction engine. Construct one per caller and pass it around;
/// every invocation is independent given its input series.
pub struct PredictionEngine {
    pub(crate) config: Config,
}

impl PredictionEngine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate a prediction from an already-fetched series of closes,
    /// ordered oldest first.
    ///
    /// Signal heuristic, in order: start at Hold/50; an oversold RSI flips to
    /// Buy (+20), an overbought RSI to Sell (+20); agreement between the
    /// signal and the price's side of the 20-day SMA adds 15 more. Capped at
    /// [`MAX_CONFIDENCE`].
    pub fn predict_series(&self, symbol: &str, prices: &[f64]) -> Prediction {
        if prices.len() < MIN_HISTORY {
            debug!(
                symbol,
                count = prices.len(),
                min = MIN_HISTORY,
                "insufficient history for prediction"
            );
            return Prediction::insufficient_data(symbol);
        }

        let rsi = calculate_rsi(prices, self.config.rsi_period);
        let macd = calculate_macd(prices);
        let sma20 = calculate_sma(prices, self.config.sma_period);
        let current_price = prices[prices.len() - 1];

        let mut signal = Signal::Hold;
        let mut confidence: u32 = 50;

        if let Some(rsi) = rsi {
            if rsi.value < self.config.rsi_oversold {
                signal = Signal::Buy;
                confidence += 20;
            } else if rsi.value > self.config.rsi_overbought {
                signal = Signal::Sell;
                confidence += 20;
            }
        }

        let above_sma = sma20.map(|s| current_price > s.value).unwrap_or(false);
        if above_sma {
            if signal == Signal::Buy {
                confidence += 15;
            }
        } else if signal == Signal::Sell {
            confidence += 15;
        }

        let confidence = confidence.min(MAX_CONFIDENCE as u32) as u8;

        // Bounded heuristic extrapolation, not a statistical forecast: drift
        // in the direction of the SMA trend, scaled by clamped volatility.
        let trend_direction = if above_sma { 1.0 } else { -1.0 };
        let volatility = calculate_volatility(prices);
        let predicted_7d =
            current_price + current_price * self.config.drift_rate * trend_direction * volatility;

        debug!(
            symbol,
            signal = ?signal,
            confidence,
            current_price,
            predicted_7d,
            "prediction generated"
        );

        Prediction {
            symbol: symbol.to_string(),
            current_price: Some(current_price),
            predicted_7d: Some(predicted_7d),
            prediction: signal,
            confidence,
            indicators: IndicatorReadout::from_values(
                rsi.map(|r| r.value),
                macd.map(|m| m.value),
                sma20.map(|s| s.value),
            ),
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// Fetch history from the provider and predict.
    ///
    /// A failed fetch maps to an [`Signal::Error`] prediction; nothing ever
    /// escapes as `Err`.
    pub async fn predict(&self, symbol: &str, provider: &dyn QuoteProvider) -> Prediction {
        match provider.price_history(symbol, self.config.history_days).await {
            Ok(prices) => self.predict_series(symbol, &prices),
            Err(e) => {
                warn!(symbol, error = %e, "history fetch failed");
                Prediction::failure(symbol, e.to_string())
            }
        }
    }
}
