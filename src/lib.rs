//! # Coins-E Client
//!
//! An async Rust client library for the Coins-E exchange REST API (v2).
//!
//! ## Features
//!
//! - Public market-data endpoints, no configuration required
//! - Trade (private) endpoints with HMAC-SHA512 request signing
//! - Injectable nonce source for rapid call bursts and deterministic tests
//! - Typed order parameters with financial precision via `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coinse_api_client::rest::CoinseRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinseRestClient::new();
//!     let markets = client.markets().await?;
//!     println!("Markets: {markets}");
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;

// Re-export commonly used types at crate root
pub use error::CoinseError;
pub use rest::private::{ListOrdersParams, OrderSide, PlaceOrderParams};
pub use rest::{CoinseClient, CoinseRestClient};

/// Result type alias using CoinseError
pub type Result<T> = std::result::Result<T, CoinseError>;
