//! HMAC-SHA512 signature generation for Coins-E trade API authentication.
//!
//! Trade endpoints accept a form-encoded POST body carrying the command
//! parameters plus `nonce` and `method` fields, and verify a signature
//! computed as:
//! ```text
//! hex(HMAC-SHA512(form_body, api_secret))
//! ```
//! over the exact bytes of that body. The digest travels in the `sign`
//! header and the API key in the `key` header.

use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha512;

use crate::auth::Credentials;
use crate::error::CoinseError;

type HmacSha512 = Hmac<Sha512>;

/// A signed trade-API request, ready to POST.
///
/// Ephemeral: constructed per call and discarded once the HTTP call
/// completes. The `body` must be sent byte-for-byte as signed — the exchange
/// recomputes the digest over the body it receives.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    /// The canonical form-encoded body, exactly as signed.
    pub body: String,
    /// Lowercase hex HMAC-SHA512 digest of `body`; the `sign` header value.
    pub signature: String,
    /// The API key; the `key` header value.
    pub api_key: String,
}

/// Sign a trade-API command.
///
/// The body is assembled as `<params...>&nonce=<nonce>&method=<method>`:
/// the caller's parameters in their serialized order, then the nonce stamp,
/// then the method name. Keys are never re-ordered after encoding, so the
/// same parameters and nonce always produce the same body and therefore the
/// same signature.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the key and secret
/// * `method` - The logical method name (e.g., "neworder")
/// * `params` - The command parameters; any form-encodable `Serialize` shape
/// * `nonce` - The nonce value for this request
///
/// # Example
///
/// ```
/// use coinse_api_client::auth::{Credentials, sign_request};
///
/// # fn main() -> Result<(), coinse_api_client::CoinseError> {
/// let credentials = Credentials::new("api_key", "api_secret");
/// let signed = sign_request(&credentials, "getorder", &[("order_id", "12345")], 1_700_000_000)?;
/// assert_eq!(signed.body, "order_id=12345&nonce=1700000000&method=getorder");
/// # Ok(())
/// # }
/// ```
pub fn sign_request<P>(
    credentials: &Credentials,
    method: &str,
    params: &P,
    nonce: u64,
) -> Result<SignedRequest, CoinseError>
where
    P: Serialize + ?Sized,
{
    let encoded = serde_urlencoded::to_string(params)?;
    let stamp =
        serde_urlencoded::to_string([("nonce", nonce.to_string()), ("method", method.to_string())])?;
    let body = if encoded.is_empty() {
        stamp
    } else {
        format!("{encoded}&{stamp}")
    };

    // HMAC-SHA512 takes the raw secret bytes as its key.
    let mut mac = HmacSha512::new_from_slice(credentials.expose_secret().as_bytes())
        .expect("HMAC-SHA512 accepts keys of any length");
    mac.update(body.as_bytes());
    let signature = hex::encode(mac.finalize().into_bytes());

    Ok(SignedRequest {
        body,
        signature,
        api_key: credentials.api_key.clone(),
    })
}
