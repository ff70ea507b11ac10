//! Coins-E REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;
use tracing::debug;

use crate::auth::{Credentials, NonceProvider, SignedRequest, UnixTimeNonce, sign_request};
use crate::error::CoinseError;
use crate::rest::endpoints::COINSE_API_URL;
use crate::rest::private::{ListOrdersParams, PlaceOrderParams};
use crate::rest::traits::CoinseClient;

/// Default timeout applied to the internally-built HTTP client.
const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// The Coins-E REST API client.
///
/// This client provides access to the Coins-E public market-data endpoints
/// and, when credentials are configured, the trade (private) endpoints.
/// It handles nonce stamping, request signing, and response normalization.
///
/// # Example
///
/// ```rust,no_run
/// use coinse_api_client::rest::CoinseRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = CoinseRestClient::new();
///
///     // List the markets traded on the exchange
///     let markets = client.markets().await?;
///     println!("Markets: {markets}");
///
///     Ok(())
/// }
/// ```
///
/// For trade endpoints, provide credentials:
///
/// ```rust,no_run
/// use coinse_api_client::auth::Credentials;
/// use coinse_api_client::rest::CoinseRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinseRestClient::builder()
///         .credentials(Credentials::new("api_key", "api_secret"))
///         .build();
///
///     let wallets = client.get_all_wallets().await?;
///     println!("Wallets: {wallets}");
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinseRestClient {
    http_client: ClientWithMiddleware,
    private_url: String,
    public_url: String,
    credentials: Option<Credentials>,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl CoinseRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`CoinseRestClient::builder()`] to configure credentials for trade endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> CoinseRestClientBuilder {
        CoinseRestClientBuilder::new()
    }

    /// Whether the client holds a complete credential pair.
    pub fn has_credentials(&self) -> bool {
        self.credentials
            .as_ref()
            .is_some_and(Credentials::is_complete)
    }

    /// Make an authenticated POST request to the trade API.
    ///
    /// `method` is the trade-API method name stamped into the signed body;
    /// `prefix` and `pair` form the URL path. Exposed so callers can reach
    /// trade endpoints this crate does not name; the [named operations]
    /// are thin wrappers over this.
    ///
    /// [named operations]: crate::rest::private
    pub async fn private_post<T, P>(
        &self,
        method: &str,
        prefix: &str,
        pair: &str,
        params: &P,
    ) -> Result<T, CoinseError>
    where
        T: serde::de::DeserializeOwned,
        P: serde::Serialize + ?Sized,
    {
        let credentials = self.credentials()?;

        // One nonce per signed request.
        let nonce = self.nonce_provider.next_nonce();
        let SignedRequest {
            body,
            signature,
            api_key,
        } = sign_request(credentials, method, params, nonce)?;

        let url = self.private_endpoint(prefix, pair);
        debug!(%url, method, "sending trade API request");

        let response = self
            .http_client
            .post(&url)
            .header("sign", &signature)
            .header("key", &api_key)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        let value = self.parse_response(response).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Make an unauthenticated GET request to the public API.
    ///
    /// An empty `pair` drops that path segment entirely, so exchange-wide
    /// endpoints take the form `{prefix}/{method}`. No credential check is
    /// performed: public calls work on a client built without credentials.
    pub async fn public_get<T>(
        &self,
        prefix: &str,
        pair: &str,
        method: &str,
    ) -> Result<T, CoinseError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.public_endpoint(prefix, pair, method);
        debug!(%url, "sending public API request");

        let response = self.http_client.get(&url).send().await?;
        let value = self.parse_response(response).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Resolve usable credentials, failing before any signing or network work.
    fn credentials(&self) -> Result<&Credentials, CoinseError> {
        match &self.credentials {
            Some(credentials) if credentials.is_complete() => Ok(credentials),
            _ => Err(CoinseError::MissingCredentials),
        }
    }

    /// Trade API URL: `{private_url}{prefix}/{pair}`.
    fn private_endpoint(&self, prefix: &str, pair: &str) -> String {
        format!("{}{}/{}", self.private_url, prefix, pair)
    }

    /// Public API URL: `{public_url}{prefix}/{pair}/{method}`, where an empty
    /// `pair` drops the segment and its slash.
    fn public_endpoint(&self, prefix: &str, pair: &str, method: &str) -> String {
        if pair.is_empty() {
            format!("{}{}/{}", self.public_url, prefix, method)
        } else {
            format!("{}{}/{}/{}", self.public_url, prefix, pair, method)
        }
    }

    /// Normalize a response from either endpoint family.
    ///
    /// Checks are applied in order: any status other than 200 OK fails the
    /// call, then the body must parse as JSON, then a truthy `error` field
    /// inside the body fails the call. What remains is the success payload.
    async fn parse_response(&self, response: reqwest::Response) -> Result<Value, CoinseError> {
        let status = response.status();
        if status != StatusCode::OK {
            return Err(CoinseError::UnexpectedStatus(status));
        }

        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)?;

        // The exchange reports application errors inside a 200 body.
        match value.get("error") {
            Some(error) if is_truthy(error) => Err(CoinseError::Api(error_message(error))),
            _ => Ok(value),
        }
    }
}

impl Default for CoinseRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CoinseRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinseRestClient")
            .field("private_url", &self.private_url)
            .field("public_url", &self.public_url)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Builder for [`CoinseRestClient`].
pub struct CoinseRestClientBuilder {
    private_url: String,
    public_url: String,
    credentials: Option<Credentials>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    timeout: Duration,
    strict_tls: bool,
    http_client: Option<reqwest::Client>,
    user_agent: Option<String>,
}

impl CoinseRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            private_url: COINSE_API_URL.to_string(),
            public_url: COINSE_API_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            timeout: DEFAULT_TIMEOUT,
            strict_tls: true,
            http_client: None,
            user_agent: None,
        }
    }

    /// Set both base URLs at once (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let url = ensure_trailing_slash(url.into());
        self.private_url = url.clone();
        self.public_url = url;
        self
    }

    /// Set the trade (private) API base URL.
    pub fn private_url(mut self, url: impl Into<String>) -> Self {
        self.private_url = ensure_trailing_slash(url.into());
        self
    }

    /// Set the public API base URL.
    pub fn public_url(mut self, url: impl Into<String>) -> Self {
        self.public_url = ensure_trailing_slash(url.into());
        self
    }

    /// Set the credentials used for trade (private) endpoints.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider (default: wall-clock Unix seconds).
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set the request timeout (default 5000 ms).
    ///
    /// Ignored when a [custom HTTP client](Self::http_client) is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Control TLS certificate verification (default: strict).
    ///
    /// Ignored when a [custom HTTP client](Self::http_client) is supplied.
    pub fn strict_tls(mut self, strict: bool) -> Self {
        self.strict_tls = strict;
        self
    }

    /// Supply a pre-built HTTP client to perform requests with.
    ///
    /// Timeout, TLS, and user-agent settings then belong to that client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set a custom user agent for the internally-built HTTP client.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> CoinseRestClient {
        let reqwest_client = match self.http_client {
            Some(client) => client,
            None => {
                // Build default headers.
                let mut headers = HeaderMap::new();
                let user_agent = self
                    .user_agent
                    .unwrap_or_else(|| format!("coinse-api-client/{}", env!("CARGO_PKG_VERSION")));
                let header_value = HeaderValue::from_str(&user_agent)
                    .unwrap_or_else(|_| HeaderValue::from_static("coinse-api-client"));
                headers.insert(USER_AGENT, header_value);

                reqwest::Client::builder()
                    .default_headers(headers)
                    .timeout(self.timeout)
                    .danger_accept_invalid_certs(!self.strict_tls)
                    .build()
                    .unwrap_or_else(|_| reqwest::Client::new())
            }
        };

        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(UnixTimeNonce::new()));

        CoinseRestClient {
            http_client,
            private_url: self.private_url,
            public_url: self.public_url,
            credentials: self.credentials,
            nonce_provider,
        }
    }
}

impl Default for CoinseRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Endpoint URLs are built by concatenation, so base URLs must end in `/`.
fn ensure_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

/// Truthiness of the `error` field, matching how the exchange's own web
/// client evaluates it: `null`, `false`, `0`, and `""` are falsy; every
/// other value, including `[]` and `{}`, is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_none_or(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render the `error` field as an error message: strings verbatim, anything
/// else as JSON text.
fn error_message(error: &Value) -> String {
    match error {
        Value::String(message) => message.clone(),
        other => other.to_string(),
    }
}

// CoinseClient trait implementation.

impl CoinseClient for CoinseRestClient {
    // ========== Public Endpoints ==========

    async fn markets(&self) -> Result<Value, CoinseError> {
        CoinseRestClient::markets(self).await
    }

    async fn coins(&self) -> Result<Value, CoinseError> {
        CoinseRestClient::coins(self).await
    }

    async fn market_data(&self) -> Result<Value, CoinseError> {
        CoinseRestClient::market_data(self).await
    }

    async fn trades(&self, pair: &str) -> Result<Value, CoinseError> {
        CoinseRestClient::trades(self, pair).await
    }

    async fn depth(&self, pair: &str) -> Result<Value, CoinseError> {
        CoinseRestClient::depth(self, pair).await
    }

    // ========== Private Endpoints - Wallets ==========

    async fn get_all_wallets(&self) -> Result<Value, CoinseError> {
        CoinseRestClient::get_all_wallets(self).await
    }

    async fn get_wallet(&self, coin: &str) -> Result<Value, CoinseError> {
        CoinseRestClient::get_wallet(self, coin).await
    }

    async fn get_deposit_address(&self, coin: &str) -> Result<Value, CoinseError> {
        CoinseRestClient::get_deposit_address(self, coin).await
    }

    async fn update_wallet(&self, coin: &str) -> Result<Value, CoinseError> {
        CoinseRestClient::update_wallet(self, coin).await
    }

    // ========== Private Endpoints - Trading ==========

    async fn place_order(
        &self,
        pair: &str,
        params: &PlaceOrderParams,
    ) -> Result<Value, CoinseError> {
        CoinseRestClient::place_order(self, pair, params).await
    }

    async fn get_order(&self, pair: &str, order_id: &str) -> Result<Value, CoinseError> {
        CoinseRestClient::get_order(self, pair, order_id).await
    }

    async fn cancel_order(&self, pair: &str, order_id: &str) -> Result<Value, CoinseError> {
        CoinseRestClient::cancel_order(self, pair, order_id).await
    }

    async fn list_orders(
        &self,
        pair: &str,
        params: &ListOrdersParams,
    ) -> Result<Value, CoinseError> {
        CoinseRestClient::list_orders(self, pair, params).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_public_endpoint_drops_empty_pair_segment() {
        let client = CoinseRestClient::new();
        assert_eq!(
            client.public_endpoint("markets", "", "list"),
            "https://www.coins-e.com/api/v2/markets/list"
        );
        assert_eq!(
            client.public_endpoint("market", "ltc_btc", "depth"),
            "https://www.coins-e.com/api/v2/market/ltc_btc/depth"
        );
    }

    #[test]
    fn test_private_endpoint_shape() {
        let client = CoinseRestClient::new();
        assert_eq!(
            client.private_endpoint("wallet", "btc"),
            "https://www.coins-e.com/api/v2/wallet/btc"
        );
    }

    #[test]
    fn test_base_url_gains_trailing_slash() {
        let client = CoinseRestClient::builder()
            .base_url("http://127.0.0.1:9900")
            .build();
        assert_eq!(
            client.public_endpoint("markets", "", "list"),
            "http://127.0.0.1:9900/markets/list"
        );
        assert_eq!(
            client.private_endpoint("market", "ltc_btc"),
            "http://127.0.0.1:9900/market/ltc_btc"
        );
    }

    #[test]
    fn test_separate_private_and_public_urls() {
        let client = CoinseRestClient::builder()
            .private_url("http://trade.example/")
            .public_url("http://data.example/")
            .build();
        assert_eq!(
            client.private_endpoint("wallet", "btc"),
            "http://trade.example/wallet/btc"
        );
        assert_eq!(
            client.public_endpoint("coins", "", "list"),
            "http://data.example/coins/list"
        );
    }

    #[test]
    fn test_error_field_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));

        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!(-3.5)));
        assert!(is_truthy(&json!("Invalid nonce")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!({"code": 42})));
    }

    #[test]
    fn test_error_message_renders_strings_verbatim() {
        assert_eq!(error_message(&json!("Invalid nonce")), "Invalid nonce");
        assert_eq!(error_message(&json!({"code": 42})), r#"{"code":42}"#);
        assert_eq!(error_message(&json!(true)), "true");
    }

    #[test]
    fn test_client_debug_omits_credentials() {
        let client = CoinseRestClient::builder()
            .credentials(Credentials::new("key", "secret"))
            .build();
        let output = format!("{client:?}");
        assert!(output.contains("has_credentials: true"));
        assert!(!output.contains("secret"));
    }
}
