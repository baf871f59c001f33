use serde::{Deserialize, Serialize};

/// Constant MACD signal-line label. No signal-line EMA is computed; the
/// label is a documented simplification of the reference heuristic, which
/// only consumes the MACD line itself.
pub const MACD_SIGNAL_NEUTRAL: &str = "NEUTRAL";

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdIndicator {
    /// EMA(12) - EMA(26) over the full series.
    pub value: f64,
    /// Always [`MACD_SIGNAL_NEUTRAL`].
    pub signal: String,
}

impl MacdIndicator {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            signal: MACD_SIGNAL_NEUTRAL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SmaIndicator {
    pub value: f64,
    pub period: u32,
}

/// Indicator values rendered for output as fixed 2-decimal strings.
///
/// Raw `f64` values are used throughout the computation; formatting happens
/// once, at the prediction boundary. Absent fields mean the indicator's
/// minimum-length precondition failed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicatorReadout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma20: Option<String>,
}

impl IndicatorReadout {
    pub fn from_values(rsi: Option<f64>, macd: Option<f64>, sma20: Option<f64>) -> Self {
        Self {
            rsi: rsi.map(format_2dp),
            macd: macd.map(format_2dp),
            sma20: sma20.map(format_2dp),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rsi.is_none() && self.macd.is_none() && self.sma20.is_none()
    }
}

fn format_2dp(value: f64) -> String {
    format!("{:.2}", value)
}
