//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::trend::ema;
use crate::models::indicators::MacdIndicator;

/// Fast EMA period.
pub const MACD_FAST_PERIOD: u32 = 12;
/// Slow EMA period; also the minimum series length.
pub const MACD_SLOW_PERIOD: u32 = 26;

/// Calculate the MACD line: EMA(12) - EMA(26) over the full series.
///
/// Requires at least 26 closes. The result carries a constant "NEUTRAL"
/// signal label — no 9-period signal-line EMA is computed (see
/// [`MacdIndicator`]).
pub fn calculate_macd(prices: &[f64]) -> Option<MacdIndicator> {
    if prices.len() < MACD_SLOW_PERIOD as usize {
        return None;
    }

    let fast = ema(prices, MACD_FAST_PERIOD)?;
    let slow = ema(prices, MACD_SLOW_PERIOD)?;

    Some(MacdIndicator::new(fast - slow))
}
