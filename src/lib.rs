//! mart-client: signed client for the Walmart Marketplace REST/XML API
//!
//! This is the root crate that re-exports the library for benchmarks and
//! integration tests. The implementation lives in `marketplace-core`:
//!
//! - `signing`: canonical string, RSA-SHA256 signer, key loading, clocks
//! - `api`: blocking client, endpoint groups, transport seam
//! - `feeds`: XML documents for prices, inventory and shipping
//! - `report`: report archive extraction

pub use marketplace_core as core;
pub use marketplace_core::{
    ApiResponse, ClientConfig, Credentials, Error, MarketplaceClient, RequestSigner, Result,
    SigningResult,
};
pub use rust_decimal::Decimal;
