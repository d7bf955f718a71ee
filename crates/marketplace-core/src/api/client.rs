//! Marketplace API client.
//!
//! Each call builds its final URL, signs that exact URL, attaches the
//! authentication headers, and sends the request once. There is no retry:
//! every response, successful or not, is handed back as-is.

use super::headers::{auth_headers, set_xml_content_type};
use super::query::QueryString;
use super::transport::{ApiRequest, ApiResponse, HttpTransport, ReqwestTransport, RequestBody};
use crate::config::ClientConfig;
use crate::signing::{Clock, RequestSigner, SystemClock};
use crate::{Error, Result};
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

/// Signed client for the marketplace REST/XML API.
pub struct MarketplaceClient {
    signer: RequestSigner,
    channel_type: Option<String>,
    base_url: Url,
    transport: Box<dyn HttpTransport>,
}

impl MarketplaceClient {
    /// Create a client backed by a blocking `reqwest` transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Self::with_transport(config, Box::new(transport), Arc::new(SystemClock))
    }

    /// Create a client with a custom transport and time source.
    pub fn with_transport(
        config: ClientConfig,
        transport: Box<dyn HttpTransport>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config {
                message: format!("base URL cannot carry paths: {}", config.base_url),
            });
        }

        Ok(Self {
            signer: RequestSigner::with_clock(config.credentials, clock),
            channel_type: config.channel_type,
            base_url,
            transport,
        })
    }

    pub fn consumer_id(&self) -> &str {
        self.signer.consumer_id()
    }

    pub fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    /// Base URL with `segments` appended, each percent-encoded.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidRequest {
                message: "base URL cannot carry paths".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Endpoint URL with a query string.
    pub(crate) fn endpoint_with_query(&self, segments: &[&str], query: QueryString) -> Result<Url> {
        let mut url = self.endpoint(segments)?;
        query.apply(&mut url);
        Ok(url)
    }

    /// Sign and send one request.
    ///
    /// `xml_content_type` adds `Content-Type: application/xml`, which some
    /// endpoints expect even when no body is sent.
    pub(crate) fn execute(
        &self,
        method: Method,
        url: Url,
        body: RequestBody,
        xml_content_type: bool,
    ) -> Result<ApiResponse> {
        let signed = self.signer.sign(url.as_str(), method.as_str())?;
        let correlation_id = Uuid::new_v4();

        let mut headers = auth_headers(
            self.signer.consumer_id(),
            &signed,
            correlation_id,
            self.channel_type.as_deref(),
        )?;
        if xml_content_type {
            set_xml_content_type(&mut headers);
        }

        debug!(
            method = %method,
            url = %url,
            correlation_id = %correlation_id,
            timestamp = %signed.timestamp,
            "Sending marketplace request"
        );

        let response = self.transport.send(ApiRequest {
            method: method.clone(),
            url: url.clone(),
            headers,
            body,
        })?;

        if response.is_success() {
            debug!(
                status = response.status.as_u16(),
                correlation_id = %correlation_id,
                bytes = response.body.len(),
                "Marketplace request completed"
            );
        } else {
            warn!(
                method = %method,
                url = %url,
                status = response.status.as_u16(),
                correlation_id = %correlation_id,
                "Marketplace returned non-success status"
            );
        }

        Ok(response)
    }
}

impl std::fmt::Debug for MarketplaceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketplaceClient")
            .field("consumer_id", &self.consumer_id())
            .field("channel_type", &self.channel_type)
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}
