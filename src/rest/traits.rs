//! Trait definition for the Coins-E REST API client.
//!
//! This module provides the `CoinseClient` trait which abstracts all REST API operations.
//! This enables:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., rate limiting wrapper)
//! - Alternative implementations
//!
//! # Example
//!
//! ```rust,ignore
//! use coinse_api_client::rest::{CoinseClient, CoinseRestClient};
//!
//! async fn show_depth<C: CoinseClient>(client: &C) -> Result<(), coinse_api_client::CoinseError> {
//!     let depth = client.depth("ltc_btc").await?;
//!     println!("Depth: {depth}");
//!     Ok(())
//! }
//! ```

use std::future::Future;

use serde_json::Value;

use crate::error::CoinseError;
use crate::rest::private::{ListOrdersParams, PlaceOrderParams};

/// Trait defining all Coins-E REST API operations.
///
/// This trait enables dependency injection and allows for:
/// - Testing with mock implementations
/// - Wrapping with decorators (e.g., rate limiting)
/// - Alternative implementations
///
/// All methods are async and return `Result<Value, CoinseError>` with the
/// exchange's JSON response.
pub trait CoinseClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// Get every market traded on the exchange.
    fn markets(&self) -> impl Future<Output = Result<Value, CoinseError>> + Send;

    /// Get every coin listed on the exchange.
    fn coins(&self) -> impl Future<Output = Result<Value, CoinseError>> + Send;

    /// Get aggregated market data across every market.
    fn market_data(&self) -> impl Future<Output = Result<Value, CoinseError>> + Send;

    /// Get recent trade history for a market.
    fn trades(&self, pair: &str) -> impl Future<Output = Result<Value, CoinseError>> + Send;

    /// Get order book depth for a market.
    fn depth(&self, pair: &str) -> impl Future<Output = Result<Value, CoinseError>> + Send;

    // ========== Private Endpoints - Wallets ==========

    /// Get every wallet on the account.
    fn get_all_wallets(&self) -> impl Future<Output = Result<Value, CoinseError>> + Send;

    /// Get the wallet for a single coin.
    fn get_wallet(&self, coin: &str) -> impl Future<Output = Result<Value, CoinseError>> + Send;

    /// Get the deposit address for a single coin's wallet.
    fn get_deposit_address(
        &self,
        coin: &str,
    ) -> impl Future<Output = Result<Value, CoinseError>> + Send;

    /// Ask the exchange to refresh a single coin's wallet.
    fn update_wallet(&self, coin: &str) -> impl Future<Output = Result<Value, CoinseError>> + Send;

    // ========== Private Endpoints - Trading ==========

    /// Place a new order on a market.
    fn place_order(
        &self,
        pair: &str,
        params: &PlaceOrderParams,
    ) -> impl Future<Output = Result<Value, CoinseError>> + Send;

    /// Get a single order on a market.
    fn get_order(
        &self,
        pair: &str,
        order_id: &str,
    ) -> impl Future<Output = Result<Value, CoinseError>> + Send;

    /// Cancel a single order on a market.
    fn cancel_order(
        &self,
        pair: &str,
        order_id: &str,
    ) -> impl Future<Output = Result<Value, CoinseError>> + Send;

    /// List orders on a market, optionally filtered.
    fn list_orders(
        &self,
        pair: &str,
        params: &ListOrdersParams,
    ) -> impl Future<Output = Result<Value, CoinseError>> + Send;
}
