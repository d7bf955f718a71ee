//! Authentication header assembly.
//!
//! Header names are case-insensitive on the wire; they are kept lowercase
//! here because `HeaderName::from_static` requires it.

use crate::config::ClientConfig;
use crate::signing::SigningResult;
use crate::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use uuid::Uuid;

pub const SERVICE_NAME_HEADER: &str = "wm_svc.name";
pub const CONSUMER_ID_HEADER: &str = "wm_consumer.id";
pub const TIMESTAMP_HEADER: &str = "wm_sec.timestamp";
pub const SIGNATURE_HEADER: &str = "wm_sec.auth_signature";
pub const CORRELATION_ID_HEADER: &str = "wm_qos.correlation_id";
pub const CHANNEL_TYPE_HEADER: &str = "wm_consumer.channel.type";

const APPLICATION_XML: &str = "application/xml";

/// Headers carried by every authenticated call.
///
/// The correlation id is for request tracing only and is not signed.
pub(crate) fn auth_headers(
    consumer_id: &str,
    signed: &SigningResult,
    correlation_id: Uuid,
    channel_type: Option<&str>,
) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_XML));
    headers.insert(
        HeaderName::from_static(SERVICE_NAME_HEADER),
        HeaderValue::from_static(ClientConfig::SERVICE_NAME),
    );
    headers.insert(
        HeaderName::from_static(CONSUMER_ID_HEADER),
        HeaderValue::from_str(consumer_id)?,
    );
    headers.insert(
        HeaderName::from_static(TIMESTAMP_HEADER),
        HeaderValue::from_str(&signed.timestamp)?,
    );
    headers.insert(
        HeaderName::from_static(SIGNATURE_HEADER),
        HeaderValue::from_str(&signed.signature)?,
    );
    headers.insert(
        HeaderName::from_static(CORRELATION_ID_HEADER),
        HeaderValue::from_str(&correlation_id.to_string())?,
    );
    if let Some(channel_type) = channel_type {
        headers.insert(
            HeaderName::from_static(CHANNEL_TYPE_HEADER),
            HeaderValue::from_str(channel_type)?,
        );
    }

    Ok(headers)
}

pub(crate) fn set_xml_content_type(headers: &mut HeaderMap) {
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_XML));
}
