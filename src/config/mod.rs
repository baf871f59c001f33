//! Environment-backed configuration.

use std::env;

/// Current deployment environment, from `ENVIRONMENT` (default: "sandbox").
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Engine thresholds and provider pacing.
///
/// Defaults match the reference heuristic; every field can be overridden via
/// environment variables in [`Config::from_env`].
#[derive(Debug, Clone)]
pub struct Config {
    /// RSI lookback window (differences), default 14.
    pub rsi_period: u32,
    /// RSI below this reads oversold (buy), default 30.
    pub rsi_oversold: f64,
    /// RSI above this reads overbought (sell), default 70.
    pub rsi_overbought: f64,
    /// Trailing SMA window for the trend reference, default 20.
    pub sma_period: u32,
    /// Base weekly drift applied to the 7-day projection, default 0.02.
    pub drift_rate: f64,
    /// Lookback for history fetches, in days, default 30.
    pub history_days: u32,
    /// Delay between sequential provider calls, in milliseconds, default 100.
    /// Zero disables pacing (used in tests).
    pub pacing_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            sma_period: 20,
            drift_rate: 0.02,
            history_days: 30,
            pacing_delay_ms: 100,
        }
    }
}

impl Config {
    /// Build a config from environment variables, falling back to defaults
    /// for anything unset or unparseable.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(v) = env_parse("RSI_PERIOD") {
            config.rsi_period = v;
        }
        if let Some(v) = env_parse("RSI_OVERSOLD") {
            config.rsi_oversold = v;
        }
        if let Some(v) = env_parse("RSI_OVERBOUGHT") {
            config.rsi_overbought = v;
        }
        if let Some(v) = env_parse("SMA_PERIOD") {
            config.sma_period = v;
        }
        if let Some(v) = env_parse("DRIFT_RATE") {
            config.drift_rate = v;
        }
        if let Some(v) = env_parse("HISTORY_DAYS") {
            config.history_days = v;
        }
        if let Some(v) = env_parse("PACING_DELAY_MS") {
            config.pacing_delay_ms = v;
        }
        config
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
