//! Price refresh routine and quote-backed position creation.
//!
//! An external scheduler invokes [`PriceRefresher::refresh_all`] on its own
//! interval; the trigger mechanism lives outside this crate.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::models::position::Position;
use crate::portfolio::store::{PortfolioError, PositionStore};
use crate::services::market_data::QuoteProvider;

pub struct PriceRefresher {
    provider: Arc<dyn QuoteProvider>,
    store: Arc<dyn PositionStore>,
    pacing_delay: Duration,
}

impl PriceRefresher {
    pub fn new(
        provider: Arc<dyn QuoteProvider>,
        store: Arc<dyn PositionStore>,
        config: &Config,
    ) -> Self {
        Self {
            provider,
            store,
            pacing_delay: Duration::from_millis(config.pacing_delay_ms),
        }
    }

    /// Create a position, seeding the current price from a live quote.
    ///
    /// The quote fetch is best-effort with an explicit fallback: when the
    /// provider fails, the entry price stands in as the current price until
    /// the next refresh.
    pub async fn add_position(
        &self,
        symbol: &str,
        quantity: f64,
        entry_price: f64,
    ) -> Result<Position, PortfolioError> {
        let symbol = symbol.to_uppercase();
        let current_price = match self.provider.latest_quote(&symbol).await {
            Ok(quote) => quote.price,
            Err(e) => {
                debug!(symbol = %symbol, error = %e, "live quote unavailable, falling back to entry price");
                entry_price
            }
        };

        self.store
            .insert(&symbol, quantity, entry_price, current_price)
            .await
    }

    /// Refresh current prices for every stored symbol, sequentially and with
    /// the same pacing policy as batch prediction.
    ///
    /// Per-symbol failures are logged and skipped; the previous price stays
    /// in place. Returns the number of positions updated.
    pub async fn refresh_all(&self) -> usize {
        let symbols = self.store.symbols().await;
        if symbols.is_empty() {
            return 0;
        }

        info!(count = symbols.len(), "refreshing prices");
        let mut updated = 0;

        for (i, symbol) in symbols.iter().enumerate() {
            if i > 0 && !self.pacing_delay.is_zero() {
                tokio::time::sleep(self.pacing_delay).await;
            }

            match self.provider.latest_quote(symbol).await {
                Ok(quote) => {
                    if self.store.update_price(symbol, quote.price).await {
                        self.store.record_price(symbol, quote.price).await;
                        debug!(symbol = %symbol, price = quote.price, "price updated");
                        updated += 1;
                    }
                }
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "quote fetch failed, keeping previous price");
                }
            }
        }

        info!(updated, "price refresh complete");
        updated
    }
}
