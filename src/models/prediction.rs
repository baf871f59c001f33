use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::indicators::IndicatorReadout;

/// Heuristic trading signal for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
    /// Fewer historical closes than the engine's minimum window.
    InsufficientData,
    /// The history fetch failed; see [`Prediction::error`].
    Error,
}

/// Engine output for one symbol. Computed on demand, never persisted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    /// Bounded heuristic extrapolation, not a statistical forecast.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_7d: Option<f64>,
    pub prediction: Signal,
    /// Score in `[0, 95]`.
    pub confidence: u8,
    #[serde(default, skip_serializing_if = "IndicatorReadout::is_empty")]
    pub indicators: IndicatorReadout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl Prediction {
    /// Degraded result for a series shorter than the minimum window.
    pub fn insufficient_data(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            current_price: None,
            predicted_7d: None,
            prediction: Signal::InsufficientData,
            confidence: 0,
            indicators: IndicatorReadout::default(),
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// Result for a failed history fetch. Errors never escape the engine.
    pub fn failure(symbol: &str, message: impl Into<String>) -> Self {
        Self {
            symbol: symbol.to_string(),
            current_price: None,
            predicted_7d: None,
            prediction: Signal::Error,
            confidence: 0,
            indicators: IndicatorReadout::default(),
            error: Some(message.into()),
            timestamp: Utc::now(),
        }
    }
}
