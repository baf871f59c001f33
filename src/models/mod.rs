//! Shared data models spanning the engine and portfolio layers.

pub mod indicators;
pub mod position;
pub mod prediction;

pub use indicators::{IndicatorReadout, MacdIndicator, RsiIndicator, SmaIndicator};
pub use position::{PortfolioSummary, Position, Quote};
pub use prediction::{Prediction, Signal};
