//! Technical indicator computations over ordered closing-price series.
//!
//! Every function takes closes ordered oldest first. Indicators with a
//! minimum-window precondition return `None` on too-short input instead of
//! computing a misleading value.

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use momentum::{calculate_macd, calculate_rsi, calculate_rsi_default};
pub use trend::{calculate_sma, ema};
pub use volatility::calculate_volatility;
