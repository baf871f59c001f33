//! External data source boundaries.

pub mod market_data;

pub use market_data::{MarketDataError, QuoteProvider, ScriptedQuoteProvider};
