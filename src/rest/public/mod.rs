//! Public REST API endpoints (no authentication required).

use serde_json::Value;

use crate::error::CoinseError;
use crate::rest::CoinseRestClient;
use crate::rest::endpoints::{prefix, public};

impl CoinseRestClient {
    /// Get every market traded on the exchange.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coinse_api_client::rest::CoinseRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinseRestClient::new();
    ///     let markets = client.markets().await?;
    ///     println!("Markets: {markets}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn markets(&self) -> Result<Value, CoinseError> {
        self.public_get(prefix::MARKETS, "", public::LIST).await
    }

    /// Get every coin listed on the exchange.
    pub async fn coins(&self) -> Result<Value, CoinseError> {
        self.public_get(prefix::COINS, "", public::LIST).await
    }

    /// Get aggregated market data across every market.
    pub async fn market_data(&self) -> Result<Value, CoinseError> {
        self.public_get(prefix::MARKETS, "", public::DATA).await
    }

    /// Get recent trade history for a market.
    pub async fn trades(&self, pair: &str) -> Result<Value, CoinseError> {
        self.public_get(prefix::MARKET, pair, public::TRADES).await
    }

    /// Get order book depth for a market.
    pub async fn depth(&self, pair: &str) -> Result<Value, CoinseError> {
        self.public_get(prefix::MARKET, pair, public::DEPTH).await
    }
}
