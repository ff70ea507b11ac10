//! Coins-E REST API client.
//!
//! Provides access to the Coins-E public and trade (private) REST endpoints.
//!
//! # Trait-based API
//!
//! The [`CoinseClient`] trait abstracts all REST API operations, enabling:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., rate limiting wrapper)
//! - Alternative implementations
//!
//! ```rust,ignore
//! use coinse_api_client::rest::{CoinseClient, CoinseRestClient};
//!
//! async fn use_client<C: CoinseClient>(client: &C) -> Result<(), coinse_api_client::error::CoinseError> {
//!     let markets = client.markets().await?;
//!     println!("Markets: {markets}");
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
pub mod private;
pub mod public;
mod traits;

pub use client::{CoinseRestClient, CoinseRestClientBuilder};
pub use endpoints::*;
pub use traits::CoinseClient;
