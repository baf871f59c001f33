//! SMA (Simple Moving Average) indicator

use crate::models::indicators::SmaIndicator;

/// Arithmetic mean of the trailing `period` prices, most recent inclusive.
pub fn calculate_sma(prices: &[f64], period: u32) -> Option<SmaIndicator> {
    let window = period as usize;
    if window == 0 || prices.len() < window {
        return None;
    }

    let sum: f64 = prices[prices.len() - window..].iter().sum();

    Some(SmaIndicator {
        value: sum / window as f64,
        period,
    })
}
