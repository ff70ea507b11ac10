//! Authentication module for the Coins-E trade API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Nonce generation for replay attack prevention
//! - HMAC-SHA512 request signing for authenticated requests

mod credentials;
mod nonce;
mod signature;

pub use credentials::Credentials;
pub use nonce::{IncreasingNonce, NonceProvider, UnixTimeNonce};
pub use signature::{SignedRequest, sign_request};
