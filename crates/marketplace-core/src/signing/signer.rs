//! RSA-SHA256 request signer.
//!
//! Produces the `WM_SEC.AUTH_SIGNATURE` / `WM_SEC.TIMESTAMP` header pair for a
//! single outbound call.

use std::sync::Arc;

use base64::Engine;
use rsa::pkcs1v15::SigningKey;
use rsa::signature::{SignatureEncoding, Signer};
use sha2::Sha256;

use super::clock::{Clock, SystemClock};
use super::credentials::Credentials;
use super::key::load_private_key;
use crate::{Error, Result};

/// Signature and the timestamp that was signed.
///
/// Both are bound to one call; a fresh pair is produced for every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningResult {
    /// Base64 (standard alphabet, padded) PKCS#1 v1.5 signature.
    pub signature: String,
    /// Milliseconds since the Unix epoch, in decimal.
    pub timestamp: String,
}

/// Build the newline-terminated string that gets signed.
///
/// The URL is used byte-for-byte; the method is uppercased.
pub fn canonical_string(
    consumer_id: &str,
    full_url: &str,
    http_method: &str,
    timestamp: &str,
) -> String {
    format!(
        "{}\n{}\n{}\n{}\n",
        consumer_id,
        full_url,
        http_method.to_uppercase(),
        timestamp
    )
}

/// Signs requests with the client's private key.
///
/// Holds only immutable state, so one signer can be shared across threads.
/// Concurrent calls that land on the same millisecond are fine: each
/// signature covers its own (url, method, timestamp) triple.
#[derive(Clone)]
pub struct RequestSigner {
    credentials: Credentials,
    clock: Arc<dyn Clock>,
}

impl RequestSigner {
    /// Create a signer that timestamps with the system clock.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_clock(credentials, Arc::new(SystemClock))
    }

    /// Create a signer with a custom time source.
    pub fn with_clock(credentials: Credentials, clock: Arc<dyn Clock>) -> Self {
        Self { credentials, clock }
    }

    pub fn consumer_id(&self) -> &str {
        self.credentials.consumer_id()
    }

    /// Sign `full_url` for `http_method`.
    ///
    /// `full_url` must be exactly what goes on the wire, query string
    /// included. The key is parsed on every call, so a malformed key fails
    /// here with [`Error::KeyParse`].
    pub fn sign(&self, full_url: &str, http_method: &str) -> Result<SigningResult> {
        if full_url.is_empty() {
            return Err(Error::InvalidRequest {
                message: "cannot sign an empty URL".to_string(),
            });
        }

        // Formatted once; the same string is signed and returned for the header.
        let timestamp = self.clock.now_millis().to_string();
        let string_to_sign = canonical_string(
            self.credentials.consumer_id(),
            full_url,
            http_method,
            &timestamp,
        );

        let private_key = load_private_key(self.credentials.private_key())?;
        let signing_key = SigningKey::<Sha256>::new(private_key);

        let signature = signing_key
            .try_sign(string_to_sign.as_bytes())
            .map_err(|e| Error::Signing {
                message: format!("RSA signing failed: {}", e),
            })?;

        Ok(SigningResult {
            signature: base64::engine::general_purpose::STANDARD.encode(signature.to_bytes()),
            timestamp,
        })
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("consumer_id", &self.credentials.consumer_id())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signing::clock::FixedClock;
    use rsa::pkcs1v15::{Signature, VerifyingKey};
    use rsa::signature::Verifier;
    use rsa::RsaPublicKey;

    const TEST_KEY: &str = include_str!("testdata/rsa2048.key");
    const UNDERSIZED_KEY: &str = include_str!("testdata/rsa384.key");
    const CONSUMER_ID: &str = "abc123";
    const ORDER_URL: &str = "https://marketplace.example.com/v3/orders/555";
    const FIXED_MILLIS: i64 = 1_700_000_000_000;

    fn fixed_signer() -> RequestSigner {
        RequestSigner::with_clock(
            Credentials::new(CONSUMER_ID, TEST_KEY),
            Arc::new(FixedClock(FIXED_MILLIS)),
        )
    }

    fn verify(message: &str, signature_b64: &str) -> bool {
        let private_key = load_private_key(TEST_KEY).unwrap();
        let verifying_key = VerifyingKey::<Sha256>::new(RsaPublicKey::from(&private_key));
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(signature_b64)
            .unwrap();
        let signature = Signature::try_from(bytes.as_slice()).unwrap();
        verifying_key.verify(message.as_bytes(), &signature).is_ok()
    }

    #[test]
    fn test_canonical_string_example() {
        assert_eq!(
            canonical_string(CONSUMER_ID, ORDER_URL, "GET", "1700000000000"),
            "abc123\nhttps://marketplace.example.com/v3/orders/555\nGET\n1700000000000\n"
        );
    }

    #[test]
    fn test_canonical_string_uppercases_method() {
        assert_eq!(
            canonical_string(CONSUMER_ID, ORDER_URL, "get", "1"),
            canonical_string(CONSUMER_ID, ORDER_URL, "GET", "1")
        );
        assert!(canonical_string(CONSUMER_ID, ORDER_URL, "delete", "1").contains("\nDELETE\n"));
    }

    #[test]
    fn test_canonical_string_keeps_url_verbatim() {
        let url = "https://marketplace.example.com/v3/orders?limit=200&createdStartDate=2024-01-01";
        let canonical = canonical_string(CONSUMER_ID, url, "GET", "1");
        assert_eq!(canonical.lines().nth(1), Some(url));
        assert!(canonical.ends_with('\n'));
    }

    #[test]
    fn test_sign_verifies() {
        let signed = fixed_signer().sign(ORDER_URL, "GET").unwrap();
        assert_eq!(signed.timestamp, "1700000000000");

        let message = canonical_string(CONSUMER_ID, ORDER_URL, "GET", &signed.timestamp);
        assert!(verify(&message, &signed.signature));
    }

    #[test]
    fn test_sign_is_deterministic_for_fixed_clock() {
        let signer = fixed_signer();
        let a = signer.sign(ORDER_URL, "GET").unwrap();
        let b = signer.sign(ORDER_URL, "get").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_signature_length_matches_key() {
        let signed = fixed_signer().sign(ORDER_URL, "PUT").unwrap();
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(&signed.signature)
            .unwrap();
        assert_eq!(bytes.len(), 256);
    }

    #[test]
    fn test_tampered_fields_fail_verification() {
        let signed = fixed_signer().sign(ORDER_URL, "GET").unwrap();
        let ts = &signed.timestamp;

        let other_url = "https://marketplace.example.com/v3/orders/556";
        assert!(!verify(&canonical_string(CONSUMER_ID, other_url, "GET", ts), &signed.signature));
        assert!(!verify(&canonical_string("abc124", ORDER_URL, "GET", ts), &signed.signature));
        assert!(!verify(&canonical_string(CONSUMER_ID, ORDER_URL, "PUT", ts), &signed.signature));
        assert!(!verify(
            &canonical_string(CONSUMER_ID, ORDER_URL, "GET", "1700000000001"),
            &signed.signature
        ));
    }

    #[test]
    fn test_system_clock_timestamp_is_current() {
        let signer = RequestSigner::new(Credentials::new(CONSUMER_ID, TEST_KEY));
        let before = chrono::Utc::now().timestamp_millis();
        let signed = signer.sign(ORDER_URL, "GET").unwrap();

        let ts: i64 = signed.timestamp.parse().unwrap();
        assert!((ts - before).abs() <= 2000);
        assert!(signed.timestamp.chars().all(|c| c.is_ascii_digit()));

        let message = canonical_string(CONSUMER_ID, ORDER_URL, "GET", &signed.timestamp);
        assert!(verify(&message, &signed.signature));
    }

    #[test]
    fn test_malformed_key_is_key_parse_error() {
        let truncated = &TEST_KEY.trim()[..200];
        let signer = RequestSigner::with_clock(
            Credentials::new(CONSUMER_ID, truncated),
            Arc::new(FixedClock(FIXED_MILLIS)),
        );
        let err = signer.sign(ORDER_URL, "GET").unwrap_err();
        assert!(matches!(err, Error::KeyParse { .. }));
    }

    #[test]
    fn test_undersized_key_is_signing_error() {
        // Parses fine, but 48 bytes cannot hold a SHA-256 DigestInfo plus padding
        let signer = RequestSigner::with_clock(
            Credentials::new(CONSUMER_ID, UNDERSIZED_KEY),
            Arc::new(FixedClock(FIXED_MILLIS)),
        );
        let err = signer.sign(ORDER_URL, "GET").unwrap_err();
        assert!(matches!(err, Error::Signing { .. }), "got {:?}", err);
    }

    #[test]
    fn test_empty_url_rejected() {
        let err = fixed_signer().sign("", "GET").unwrap_err();
        assert!(matches!(err, Error::InvalidRequest { .. }));
    }

    #[test]
    fn test_concurrent_signing() {
        let signer = RequestSigner::new(Credentials::new(CONSUMER_ID, TEST_KEY));

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let signer = &signer;
                    s.spawn(move || {
                        let url = format!("{}?line={}", ORDER_URL, i);
                        let signed = signer.sign(&url, "GET").unwrap();
                        (url, signed)
                    })
                })
                .collect();

            for handle in handles {
                let (url, signed) = handle.join().unwrap();
                let message = canonical_string(CONSUMER_ID, &url, "GET", &signed.timestamp);
                assert!(verify(&message, &signed.signature));
            }
        });
    }

    #[test]
    fn test_debug_does_not_expose_key() {
        let debug_str = format!("{:?}", fixed_signer());
        assert!(debug_str.contains(CONSUMER_ID));
        assert!(!debug_str.contains(TEST_KEY.trim()));
    }
}
