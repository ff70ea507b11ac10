//! Error types for the Coins-E client library.

use reqwest::StatusCode;
use thiserror::Error;

/// The main error type for all Coins-E client operations.
///
/// Every failure is surfaced to the caller through this type; the client
/// performs no internal recovery or retries.
#[derive(Error, Debug)]
pub enum CoinseError {
    /// A private endpoint was called without a usable API key and secret.
    ///
    /// Raised before any signing or network activity takes place. An empty
    /// key or secret counts as missing.
    #[error("missing credentials: API key and secret are required for the trade API")]
    MissingCredentials,

    /// The HTTP request could not be completed.
    ///
    /// Covers connection failures, TLS problems, timeouts, and body-read
    /// errors surfaced by the transport.
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest_middleware::Error),

    /// The exchange answered with a status other than 200 OK.
    #[error("HTTP request failed with status {0}")]
    UnexpectedStatus(StatusCode),

    /// The response body could not be decoded as JSON.
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The exchange returned 200 OK but the body reports an error.
    ///
    /// Carries the value of the body's `error` field.
    #[error("API error: {0}")]
    Api(String),

    /// Request parameters could not be form-encoded.
    #[error("invalid request parameters: {0}")]
    InvalidParams(#[from] serde_urlencoded::ser::Error),
}

impl From<reqwest::Error> for CoinseError {
    fn from(err: reqwest::Error) -> Self {
        CoinseError::RequestFailed(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_exchange_message() {
        let err = CoinseError::Api("insufficient funds".to_string());
        assert_eq!(err.to_string(), "API error: insufficient funds");
    }

    #[test]
    fn test_status_error_displays_code() {
        let err = CoinseError::UnexpectedStatus(StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_missing_credentials_names_the_trade_api() {
        let err = CoinseError::MissingCredentials;
        assert!(err.to_string().contains("trade API"));
    }
}
