//! Bounded volatility from the standard deviation of simple returns.

/// Neutral volatility when no returns can be computed.
pub const NEUTRAL_VOLATILITY: f64 = 1.0;

/// Clamp bounds keep downstream price projections bounded.
pub const VOLATILITY_FLOOR: f64 = 0.5;
pub const VOLATILITY_CEILING: f64 = 2.0;

/// Scalar volatility: population stddev of simple returns, scaled by 100
/// and clamped to `[0.5, 2.0]`.
///
/// Fewer than two prices yield the neutral 1.0. Returns with a zero
/// denominator are skipped; if every return is skipped the result is also
/// neutral.
pub fn calculate_volatility(prices: &[f64]) -> f64 {
    if prices.len() < 2 {
        return NEUTRAL_VOLATILITY;
    }

    let returns: Vec<f64> = prices
        .windows(2)
        .filter(|w| w[0] != 0.0)
        .map(|w| (w[1] - w[0]) / w[0])
        .collect();

    if returns.is_empty() {
        return NEUTRAL_VOLATILITY;
    }

    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;

    (variance.sqrt() * 100.0).clamp(VOLATILITY_FLOOR, VOLATILITY_CEILING)
}
