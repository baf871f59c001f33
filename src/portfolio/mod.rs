//! Portfolio positions: storage boundary, summary analytics, price refresh.

pub mod refresh;
pub mod store;
pub mod summary;

pub use refresh::PriceRefresher;
pub use store::{InMemoryPositionStore, PortfolioError, PositionStore};
pub use summary::summarize;
