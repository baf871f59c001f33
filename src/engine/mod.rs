//! Indicator & prediction engine.

pub mod batch;
pub mod predictor;

pub use predictor::{PredictionEngine, MIN_HISTORY};
