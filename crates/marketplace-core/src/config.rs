//! Client configuration for the marketplace API.

use crate::signing::Credentials;
use crate::{Error, Result};
use std::env;
use std::time::Duration;

/// Client configuration: credentials plus transport settings.
#[derive(Clone)]
pub struct ClientConfig {
    pub credentials: Credentials,
    /// Value of the `WM_CONSUMER.CHANNEL.TYPE` header, sent only when set.
    pub channel_type: Option<String>,
    /// Base URL, always ending in `/`.
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Default marketplace API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://marketplace.walmartapis.com/";
    /// XML declaration prepended to every request document.
    pub const XML_HEAD: &'static str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
    /// Value of the `WM_SVC.NAME` header.
    pub const SERVICE_NAME: &'static str = "Walmart Marketplace";
    /// Default request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    pub fn new(consumer_id: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(consumer_id, private_key),
            channel_type: None,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_channel_type(mut self, channel_type: impl Into<String>) -> Self {
        self.channel_type = Some(channel_type.into());
        self
    }

    /// Override the base URL. A trailing `/` is added when missing so
    /// endpoint paths can be appended directly.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build configuration from a variable lookup.
    fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let consumer_id = lookup("MARKETPLACE_CONSUMER_ID").ok_or_else(|| Error::Config {
            message: "MARKETPLACE_CONSUMER_ID environment variable not set".to_string(),
        })?;
        let private_key = lookup("MARKETPLACE_PRIVATE_KEY").ok_or_else(|| Error::Config {
            message: "MARKETPLACE_PRIVATE_KEY environment variable not set".to_string(),
        })?;

        let mut config = Self::new(consumer_id, private_key);

        if let Some(channel_type) = lookup("MARKETPLACE_CHANNEL_TYPE").filter(|s| !s.is_empty()) {
            config = config.with_channel_type(channel_type);
        }
        if let Some(base_url) = lookup("MARKETPLACE_BASE_URL").filter(|s| !s.is_empty()) {
            config = config.with_base_url(base_url);
        }
        if let Some(raw) = lookup("MARKETPLACE_TIMEOUT_SECS") {
            let secs: u64 = raw.parse().map_err(|_| Error::Config {
                message: format!("MARKETPLACE_TIMEOUT_SECS is not a number: {}", raw),
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("credentials", &self.credentials)
            .field("channel_type", &self.channel_type)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
