//! Foliotrack: investment holdings tracking and heuristic price prediction.
//!
//! The crate models portfolio positions, derives summary analytics, and
//! computes technical indicators (RSI, MACD, SMA, EMA, volatility) plus a
//! composite buy/sell signal with a confidence score and a bounded 7-day
//! price projection.
//!
//! Data sources and persistence sit behind the [`services::market_data::QuoteProvider`]
//! and [`portfolio::store::PositionStore`] traits; the engine itself is pure
//! computation plus one serialized fetch per symbol.

pub mod config;
pub mod engine;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod portfolio;
pub mod services;
