//! Marketplace Core Library
//!
//! Signed access to the Walmart Marketplace REST/XML API: request signing,
//! header assembly, XML feed builders, and report archive extraction.

pub mod api;
pub mod config;
pub mod error;
pub mod feeds;
pub mod report;
pub mod signing;

pub use api::{ApiResponse, MarketplaceClient};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use signing::{Credentials, RequestSigner, SigningResult};
