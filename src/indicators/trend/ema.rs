//! EMA (Exponential Moving Average) indicator

/// Exponential moving average across the entire series.
///
/// Smoothing constant `k = 2 / (period + 1)`; the first price seeds the
/// average and every subsequent price folds in as `price*k + ema*(1-k)`.
/// Only `k` depends on `period` — the fold always runs over the full input,
/// so with `period = 1` the result is exactly the last price.
pub fn ema(prices: &[f64], period: u32) -> Option<f64> {
    let (&first, rest) = prices.split_first()?;
    let k = 2.0 / (period as f64 + 1.0);

    let mut ema = first;
    for &price in rest {
        ema = price * k + ema * (1.0 - k);
    }

    Some(ema)
}
