//! Position storage boundary with an in-memory implementation.
//!
//! Relational backends implement [`PositionStore`] in their own crates; the
//! in-memory store backs the demo binary and tests.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::position::Position;

#[derive(Debug)]
pub enum PortfolioError {
    /// A position for this symbol already exists.
    DuplicateSymbol(String),
    /// No position with this id.
    NotFound(u64),
}

impl fmt::Display for PortfolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSymbol(symbol) => write!(f, "symbol {} already exists", symbol),
            Self::NotFound(id) => write!(f, "position {} not found", id),
        }
    }
}

impl std::error::Error for PortfolioError {}

#[async_trait]
pub trait PositionStore: Send + Sync {
    /// All positions, newest first.
    async fn list(&self) -> Vec<Position>;

    async fn get(&self, id: u64) -> Option<Position>;

    /// Symbols of every stored position, in insertion order.
    async fn symbols(&self) -> Vec<String>;

    /// Insert a position; the symbol must not already be held.
    async fn insert(
        &self,
        symbol: &str,
        quantity: f64,
        entry_price: f64,
        current_price: f64,
    ) -> Result<Position, PortfolioError>;

    /// Set the current price and refresh timestamp for a symbol. Returns
    /// false when the symbol is not held.
    async fn update_price(&self, symbol: &str, price: f64) -> bool;

    /// Append an observed price to the symbol's history log.
    async fn record_price(&self, symbol: &str, price: f64);

    /// Observed prices for a symbol, oldest first.
    async fn price_log(&self, symbol: &str) -> Vec<f64>;

    async fn delete(&self, id: u64) -> Result<(), PortfolioError>;
}

struct StoreInner {
    next_id: u64,
    positions: Vec<Position>,
    price_log: HashMap<String, Vec<f64>>,
}

/// Non-persistent store guarded by a single `RwLock`.
pub struct InMemoryPositionStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryPositionStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                next_id: 1,
                positions: Vec::new(),
                price_log: HashMap::new(),
            }),
        }
    }
}

impl Default for InMemoryPositionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PositionStore for InMemoryPositionStore {
    async fn list(&self) -> Vec<Position> {
        let inner = self.inner.read().await;
        let mut positions = inner.positions.clone();
        positions.reverse();
        positions
    }

    async fn get(&self, id: u64) -> Option<Position> {
        let inner = self.inner.read().await;
        inner.positions.iter().find(|p| p.id == id).cloned()
    }

    async fn symbols(&self) -> Vec<String> {
        let inner = self.inner.read().await;
        inner.positions.iter().map(|p| p.symbol.clone()).collect()
    }

    async fn insert(
        &self,
        symbol: &str,
        quantity: f64,
        entry_price: f64,
        current_price: f64,
    ) -> Result<Position, PortfolioError> {
        let mut inner = self.inner.write().await;
        if inner.positions.iter().any(|p| p.symbol == symbol) {
            return Err(PortfolioError::DuplicateSymbol(symbol.to_string()));
        }

        let now = Utc::now();
        let position = Position {
            id: inner.next_id,
            symbol: symbol.to_string(),
            quantity,
            entry_price,
            current_price: Some(current_price),
            last_updated: Some(now),
            added_at: now,
        };
        inner.next_id += 1;
        inner.positions.push(position.clone());
        Ok(position)
    }

    async fn update_price(&self, symbol: &str, price: f64) -> bool {
        let mut inner = self.inner.write().await;
        match inner.positions.iter_mut().find(|p| p.symbol == symbol) {
            Some(position) => {
                position.current_price = Some(price);
                position.last_updated = Some(Utc::now());
                true
            }
            None => false,
        }
    }

    async fn record_price(&self, symbol: &str, price: f64) {
        let mut inner = self.inner.write().await;
        inner
            .price_log
            .entry(symbol.to_string())
            .or_default()
            .push(price);
    }

    async fn price_log(&self, symbol: &str) -> Vec<f64> {
        let inner = self.inner.read().await;
        inner.price_log.get(symbol).cloned().unwrap_or_default()
    }

    async fn delete(&self, id: u64) -> Result<(), PortfolioError> {
        let mut inner = self.inner.write().await;
        let before = inner.positions.len();
        inner.positions.retain(|p| p.id != id);
        if inner.positions.len() == before {
            return Err(PortfolioError::NotFound(id));
        }
        Ok(())
    }
}
