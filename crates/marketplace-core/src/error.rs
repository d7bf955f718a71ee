//! Error types for the marketplace client.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The stored key material is not a PKCS#8 RSA private key.
    #[error("Key parse error: {message}")]
    KeyParse { message: String },

    /// The RSA primitive rejected the signing operation.
    #[error("Signing error: {message}")]
    Signing { message: String },

    #[error("XML error: {message}")]
    Xml { message: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
