//! RSI (Relative Strength Index) indicator

use crate::models::indicators::RsiIndicator;

/// Calculate RSI over the opening window of the series.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// The averages are taken over the first `period` successive differences
/// (prices `0..=period`), not a trailing window; later prices are ignored.
///
/// When the window has no losses (flat or all-gain) the ratio is degenerate
/// and the oscillator carries no information, so the result is the neutral
/// 50 rather than a saturated 100 that would mark every steady uptrend
/// overbought. All-loss windows compute naturally to 0.
pub fn calculate_rsi(prices: &[f64], period: u32) -> Option<RsiIndicator> {
    let window = period as usize;
    if window == 0 || prices.len() < window + 1 {
        return None;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;

    for i in 1..=window {
        let difference = prices[i] - prices[i - 1];
        if difference >= 0.0 {
            gains += difference;
        } else {
            losses -= difference;
        }
    }

    let avg_gain = gains / window as f64;
    let avg_loss = losses / window as f64;

    let value = if avg_loss == 0.0 {
        50.0
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    };

    Some(RsiIndicator { value, period })
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(prices: &[f64]) -> Option<RsiIndicator> {
    calculate_rsi(prices, 14)
}
