//! Credential management for Coins-E API authentication.

use secrecy::{ExposeSecret, SecretString};

/// API credentials for the trade (private) endpoints.
///
/// The secret is kept in a [`SecretString`] so it never leaks through
/// `Debug` output or accidental logging.
#[derive(Clone)]
pub struct Credentials {
    /// The API key (public identifier, sent in the `key` header).
    pub api_key: String,
    /// The API secret (private, used as the HMAC key).
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Get the API secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }

    /// Whether both the key and the secret are non-empty.
    ///
    /// The exchange rejects requests signed with empty key material, so the
    /// client treats an empty key or secret the same as no credentials.
    pub fn is_complete(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.expose_secret().is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}
