//! Request authentication for the CoinGate API.
//!
//! Authentication is the piece of protocol logic that differs between the
//! two API versions, so it sits behind the [`ApiVersion`] trait: v1 signs
//! every request with a nonce-keyed HMAC-SHA256, v2 sends a static token
//! header. The trait also pins the order schema a version speaks, which lets
//! [`CoinGateClient`](crate::api::CoinGateClient) share one dispatch path.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use sha2::Sha256;

use crate::api::error::ClientError;
use crate::api::types::{ApiOrder, V1Order, V2Order};

/// Tracks the last nonce issued so every call returns a strictly increasing
/// value even when the wall-clock has not advanced a full microsecond.
static LAST_NONCE: AtomicU64 = AtomicU64::new(0);

/// One version of the CoinGate API: its order schema, its version path
/// segment, and its way of authenticating a request.
pub trait ApiVersion {
    /// Order schema this version speaks.
    type Order: ApiOrder;

    /// Version number used in the `/v{n}` path prefix.
    const VERSION: u8;

    /// Compute the authentication headers for one request.
    fn auth_headers(&self) -> Result<HeaderMap, ClientError>;
}

/// Returns a strictly increasing microsecond UNIX timestamp.
///
/// Successive calls always return a larger value than the previous one, even
/// when the clock resolution is too coarse or the clock jumps backwards, so
/// the signed message is unique per request.
fn next_nonce() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(0);

    let mut prev = LAST_NONCE.load(Ordering::Relaxed);
    loop {
        let nonce = now.max(prev + 1);
        match LAST_NONCE.compare_exchange_weak(prev, nonce, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return nonce,
            Err(actual) => prev = actual,
        }
    }
}

/// Computes the `Access-Signature` header value.
///
/// Algorithm: `hex(HMAC-SHA256(api_secret, nonce + app_id + api_key))`.
fn sign(api_secret: &str, nonce: u64, app_id: &str, api_key: &str) -> Result<String, ClientError> {
    let message = format!("{nonce}{app_id}{api_key}");
    let mut mac = Hmac::<Sha256>::new_from_slice(api_secret.as_bytes())
        .map_err(|e| ClientError::InvalidCredentials(format!("invalid HMAC key: {e}")))?;
    mac.update(message.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

fn header_value(raw: &str) -> Result<HeaderValue, ClientError> {
    HeaderValue::from_str(raw)
        .map_err(|e| ClientError::InvalidCredentials(format!("value not header-safe: {e}")))
}

/// Credentials for the v1 API: app id plus an API key/secret pair.
#[derive(Debug, Clone)]
pub struct V1Credentials {
    /// Merchant application id.
    pub app_id: String,
    /// API key sent in the `Access-Key` header.
    pub api_key: String,
    /// API secret used as the HMAC key. Never sent over the wire.
    pub api_secret: String,
}

impl V1Credentials {
    /// Create v1 credentials.
    pub fn new(
        app_id: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        V1Credentials {
            app_id: app_id.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

impl ApiVersion for V1Credentials {
    type Order = V1Order;

    const VERSION: u8 = 1;

    fn auth_headers(&self) -> Result<HeaderMap, ClientError> {
        let nonce = next_nonce();
        let signature = sign(&self.api_secret, nonce, &self.app_id, &self.api_key)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("access-nonce"),
            header_value(&nonce.to_string())?,
        );
        headers.insert(
            HeaderName::from_static("access-key"),
            header_value(&self.api_key)?,
        );
        headers.insert(
            HeaderName::from_static("access-signature"),
            header_value(&signature)?,
        );
        Ok(headers)
    }
}

/// Credentials for the v2 API: app id plus a bearer-style API token.
#[derive(Debug, Clone)]
pub struct V2Credentials {
    /// Merchant application id.
    pub app_id: String,
    /// API token sent in the `Authorization` header.
    pub api_token: String,
}

impl V2Credentials {
    /// Create v2 credentials.
    pub fn new(app_id: impl Into<String>, api_token: impl Into<String>) -> Self {
        V2Credentials {
            app_id: app_id.into(),
            api_token: api_token.into(),
        }
    }
}

impl ApiVersion for V2Credentials {
    type Order = V2Order;

    const VERSION: u8 = 2;

    fn auth_headers(&self) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            header_value(&format!("Token {}", self.api_token))?,
        );
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_is_deterministic_hex_sha256() {
        let sig1 = sign("secret", 1_525_000_000_000_000, "app", "key").unwrap();
        let sig2 = sign("secret", 1_525_000_000_000_000, "app", "key").unwrap();
        assert_eq!(sig1, sig2);
        assert_eq!(sig1.len(), 64);
        assert!(sig1.chars().all(|c| c.is_ascii_hexdigit()));

        // Any component change must change the signature.
        assert_ne!(sig1, sign("secret", 1_525_000_000_000_001, "app", "key").unwrap());
        assert_ne!(sig1, sign("secret", 1_525_000_000_000_000, "app2", "key").unwrap());
        assert_ne!(sig1, sign("other", 1_525_000_000_000_000, "app", "key").unwrap());
    }

    #[test]
    fn next_nonce_is_strictly_monotonic() {
        let mut prev = next_nonce();
        for _ in 0..1_000 {
            let current = next_nonce();
            assert!(current > prev, "nonce did not increase: {prev} -> {current}");
            prev = current;
        }
    }

    #[test]
    fn v1_headers_carry_nonce_key_and_signature() {
        let credentials = V1Credentials::new("app", "key", "secret");
        let headers = credentials.auth_headers().unwrap();
        assert!(headers.contains_key("access-nonce"));
        assert_eq!(headers.get("access-key").unwrap(), "key");
        assert_eq!(headers.get("access-signature").unwrap().len(), 64);
    }

    #[test]
    fn v1_nonce_header_changes_per_request() {
        let credentials = V1Credentials::new("app", "key", "secret");
        let first = credentials.auth_headers().unwrap();
        let second = credentials.auth_headers().unwrap();
        assert_ne!(first.get("access-nonce"), second.get("access-nonce"));
        assert_ne!(first.get("access-signature"), second.get("access-signature"));
    }

    #[test]
    fn v2_header_is_a_static_token() {
        let credentials = V2Credentials::new("app", "my-token");
        let headers = credentials.auth_headers().unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Token my-token");
    }

    #[test]
    fn control_characters_in_credentials_are_rejected() {
        let credentials = V2Credentials::new("app", "bad\ntoken");
        assert!(matches!(
            credentials.auth_headers(),
            Err(ClientError::InvalidCredentials(_))
        ));
    }
}
