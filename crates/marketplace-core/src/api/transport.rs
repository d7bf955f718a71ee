//! HTTP transport seam.
//!
//! The client hands a fully signed [`ApiRequest`] to an [`HttpTransport`] and
//! gets back the raw [`ApiResponse`]. Non-2xx statuses are not errors at this
//! layer; only failures to complete the exchange are.

use crate::Result;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use std::time::Duration;
use url::Url;

/// Body of an outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Empty,
    /// XML document sent as the raw request body.
    Xml(String),
    /// XML document uploaded as the multipart form field `file`.
    Multipart { file_name: String, content: String },
}

/// A request ready to go on the wire.
///
/// `url` is exactly the URL that was signed.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

/// Raw response from the marketplace.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body decoded as UTF-8, with invalid sequences replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends one request and returns the response unmodified.
#[cfg_attr(test, mockall::automock)]
pub trait HttpTransport: Send + Sync {
    fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// Blocking `reqwest` transport.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);

        let builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Xml(xml) => builder.body(xml),
            RequestBody::Multipart { file_name, content } => {
                // reqwest sets the multipart Content-Type, boundary included
                let part = Part::text(content)
                    .file_name(file_name)
                    .mime_str("application/xml")?;
                builder.multipart(Form::new().part("file", part))
            }
        };

        let response = builder.send()?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes()?.to_vec();

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}
