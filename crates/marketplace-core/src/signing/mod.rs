//! Request signing for the marketplace API.
//!
//! Every authenticated call carries an RSA-SHA256 signature over a
//! newline-terminated canonical string:
//!
//! ```text
//! {consumer_id}\n{full_url}\n{HTTP_METHOD}\n{timestamp_millis}\n
//! ```
//!
//! The timestamp inside the signed string is sent back to the server in the
//! `WM_SEC.TIMESTAMP` header, so both must be the same string.
//!
//! # Architecture
//!
//! ```text
//! Credentials ──► RequestSigner ◄── Clock
//!                      │
//!                      ▼
//!               SigningResult { signature, timestamp }
//!                      │
//!                      ▼
//!              MarketplaceClient headers
//! ```
//!
//! # Example
//!
//! ```ignore
//! use marketplace_core::signing::{Credentials, RequestSigner};
//!
//! let signer = RequestSigner::new(Credentials::new("consumer-id", key_body));
//! let signed = signer.sign("https://marketplace.walmartapis.com/v3/orders/555", "get")?;
//! println!("{} {}", signed.timestamp, signed.signature);
//! ```

pub mod clock;
pub mod credentials;
pub mod key;
pub mod signer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use credentials::Credentials;
pub use key::load_private_key;
pub use signer::{canonical_string, RequestSigner, SigningResult};
