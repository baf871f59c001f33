//! Quote provider interface for market data source integration.
//!
//! Network clients (and their auth, timeouts, and retries) live behind this
//! trait in their own crates; here the boundary is the trait plus a scripted
//! in-memory implementation for demos and tests.

use std::collections::{HashMap, HashSet};
use std::fmt;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::position::Quote;

#[derive(Debug)]
pub enum MarketDataError {
    /// The provider has no data for the symbol.
    Unavailable { symbol: String },
    /// The upstream source failed or returned a non-ok status.
    Upstream { symbol: String, message: String },
}

impl fmt::Display for MarketDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { symbol } => write!(f, "no data for {}", symbol),
            Self::Upstream { symbol, message } => {
                write!(f, "upstream error for {}: {}", symbol, message)
            }
        }
    }
}

impl std::error::Error for MarketDataError {}

#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Latest quote for a symbol.
    async fn latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;

    /// Daily closing prices ordered oldest first, covering at most the last
    /// `days` days.
    async fn price_history(&self, symbol: &str, days: u32) -> Result<Vec<f64>, MarketDataError>;
}

/// In-memory provider keyed by symbol, with injectable failures.
#[derive(Default)]
pub struct ScriptedQuoteProvider {
    quotes: RwLock<HashMap<String, Quote>>,
    histories: RwLock<HashMap<String, Vec<f64>>>,
    failing: RwLock<HashSet<String>>,
}

impl ScriptedQuoteProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_quote(&self, quote: Quote) {
        self.quotes.write().await.insert(quote.symbol.clone(), quote);
    }

    /// Seed closing prices (oldest first) and derive a matching quote from
    /// the last two closes.
    pub async fn set_history(&self, symbol: &str, closes: Vec<f64>) {
        if let Some(&price) = closes.last() {
            let previous = if closes.len() >= 2 {
                closes[closes.len() - 2]
            } else {
                price
            };
            let change = price - previous;
            let change_percent = if previous != 0.0 {
                change / previous * 100.0
            } else {
                0.0
            };
            self.set_quote(Quote {
                symbol: symbol.to_string(),
                price,
                change,
                change_percent,
            })
            .await;
        }
        self.histories
            .write()
            .await
            .insert(symbol.to_string(), closes);
    }

    /// Make every call for `symbol` fail with an upstream error.
    pub async fn fail_symbol(&self, symbol: &str) {
        self.failing.write().await.insert(symbol.to_string());
    }

    async fn check_failing(&self, symbol: &str) -> Result<(), MarketDataError> {
        if self.failing.read().await.contains(symbol) {
            return Err(MarketDataError::Upstream {
                symbol: symbol.to_string(),
                message: "scripted upstream failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl QuoteProvider for ScriptedQuoteProvider {
    async fn latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        self.check_failing(symbol).await?;
        self.quotes
            .read()
            .await
            .get(symbol)
            .cloned()
            .ok_or_else(|| MarketDataError::Unavailable {
                symbol: symbol.to_string(),
            })
    }

    async fn price_history(&self, symbol: &str, days: u32) -> Result<Vec<f64>, MarketDataError> {
        self.check_failing(symbol).await?;
        let histories = self.histories.read().await;
        let closes = histories
            .get(symbol)
            .ok_or_else(|| MarketDataError::Unavailable {
                symbol: symbol.to_string(),
            })?;

        let take = days as usize;
        if closes.len() > take {
            Ok(closes[closes.len() - take..].to_vec())
        } else {
            Ok(closes.clone())
        }
    }
}
