//! Volatility estimation.

pub mod returns;

pub use returns::calculate_volatility;
