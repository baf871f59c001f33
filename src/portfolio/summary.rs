//! Derived portfolio analytics.

use crate::models::position::{PortfolioSummary, Position};

/// Aggregate totals over a set of positions.
///
/// Value and gain only count positions with a known current price; invested
/// capital counts every position. The gain percentage is relative to total
/// invested capital, 0 when nothing is invested.
pub fn summarize(positions: &[Position]) -> PortfolioSummary {
    let mut total_value = 0.0;
    let mut total_gain = 0.0;
    let mut last_updated = None;

    for position in positions {
        if let (Some(value), Some(gain)) = (position.market_value(), position.gain()) {
            total_value += value;
            total_gain += gain;
        }
        if position.last_updated > last_updated {
            last_updated = position.last_updated;
        }
    }

    let total_invested: f64 = positions.iter().map(Position::invested).sum();
    let total_gain_pct = if total_invested > 0.0 {
        total_gain / total_invested * 100.0
    } else {
        0.0
    };

    PortfolioSummary {
        total_value,
        total_invested,
        total_gain,
        total_gain_pct,
        last_updated,
    }
}
