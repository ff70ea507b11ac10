//! Trade (private) REST API endpoints (authentication required).
//!
//! These endpoints require API credentials to be configured on the client.

mod types;

pub use types::*;

use serde_json::Value;

use crate::error::CoinseError;
use crate::rest::CoinseRestClient;
use crate::rest::endpoints::{prefix, private};

impl CoinseRestClient {
    /// Get every wallet on the account.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coinse_api_client::auth::Credentials;
    /// use coinse_api_client::rest::CoinseRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinseRestClient::builder()
    ///         .credentials(Credentials::new("key", "secret"))
    ///         .build();
    ///
    ///     let wallets = client.get_all_wallets().await?;
    ///     println!("Wallets: {wallets}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_all_wallets(&self) -> Result<Value, CoinseError> {
        #[derive(serde::Serialize)]
        struct Empty {}
        self.private_post(private::GET_WALLETS, prefix::WALLETS, "all", &Empty {})
            .await
    }

    /// Get the wallet for a single coin.
    pub async fn get_wallet(&self, coin: &str) -> Result<Value, CoinseError> {
        #[derive(serde::Serialize)]
        struct Empty {}
        self.private_post(private::GET_WALLET, prefix::WALLET, coin, &Empty {})
            .await
    }

    /// Get the deposit address for a single coin's wallet.
    pub async fn get_deposit_address(&self, coin: &str) -> Result<Value, CoinseError> {
        #[derive(serde::Serialize)]
        struct Empty {}
        self.private_post(private::GET_DEPOSIT_ADDRESS, prefix::WALLET, coin, &Empty {})
            .await
    }

    /// Ask the exchange to refresh a single coin's wallet.
    pub async fn update_wallet(&self, coin: &str) -> Result<Value, CoinseError> {
        #[derive(serde::Serialize)]
        struct Empty {}
        self.private_post(private::UPDATE_WALLET, prefix::WALLET, coin, &Empty {})
            .await
    }

    /// Place a new order on a market.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coinse_api_client::auth::Credentials;
    /// use coinse_api_client::rest::CoinseRestClient;
    /// use coinse_api_client::rest::private::{OrderSide, PlaceOrderParams};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinseRestClient::builder()
    ///         .credentials(Credentials::new("key", "secret"))
    ///         .build();
    ///
    ///     let order = PlaceOrderParams::new(
    ///         OrderSide::Buy,
    ///         "0.0021".parse()?,
    ///         "100".parse()?,
    ///     );
    ///     let placed = client.place_order("ltc_btc", &order).await?;
    ///     println!("Placed: {placed}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn place_order(
        &self,
        pair: &str,
        params: &PlaceOrderParams,
    ) -> Result<Value, CoinseError> {
        self.private_post(private::NEW_ORDER, prefix::MARKET, pair, params)
            .await
    }

    /// Get a single order on a market.
    pub async fn get_order(&self, pair: &str, order_id: &str) -> Result<Value, CoinseError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            order_id: &'a str,
        }
        self.private_post(private::GET_ORDER, prefix::MARKET, pair, &Params { order_id })
            .await
    }

    /// Cancel a single order on a market.
    pub async fn cancel_order(&self, pair: &str, order_id: &str) -> Result<Value, CoinseError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            order_id: &'a str,
        }
        self.private_post(private::CANCEL_ORDER, prefix::MARKET, pair, &Params { order_id })
            .await
    }

    /// List orders on a market, optionally filtered.
    pub async fn list_orders(
        &self,
        pair: &str,
        params: &ListOrdersParams,
    ) -> Result<Value, CoinseError> {
        self.private_post(private::LIST_ORDERS, prefix::MARKET, pair, params)
            .await
    }
}
