use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One held asset: symbol, quantity, entry price, current price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub id: u64,
    pub symbol: String,
    pub quantity: f64,
    pub entry_price: f64,
    /// Last known market price; `None` until a quote has been seen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    pub added_at: DateTime<Utc>,
}

impl Position {
    /// Capital invested at entry.
    pub fn invested(&self) -> f64 {
        self.quantity * self.entry_price
    }

    /// Market value at the current price, if one is known.
    pub fn market_value(&self) -> Option<f64> {
        self.current_price.map(|p| self.quantity * p)
    }

    /// Unrealized gain/loss at the current price.
    pub fn gain(&self) -> Option<f64> {
        self.current_price.map(|p| (p - self.entry_price) * self.quantity)
    }

    /// Unrealized gain/loss as a percentage of the entry price.
    pub fn gain_pct(&self) -> Option<f64> {
        if self.entry_price <= 0.0 {
            return None;
        }
        self.current_price
            .map(|p| (p - self.entry_price) / self.entry_price * 100.0)
    }
}

/// Latest market quote for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
}

/// Aggregate analytics over a set of positions. Value and gain only count
/// positions with a known current price; invested capital counts them all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub total_invested: f64,
    pub total_gain: f64,
    pub total_gain_pct: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}
