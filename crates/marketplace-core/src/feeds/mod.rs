//! XML request documents for price, inventory, and shipping updates.
//!
//! Every document starts with [`ClientConfig::XML_HEAD`] and is otherwise
//! written without whitespace between elements.

pub mod inventory;
pub mod price;
pub mod shipping;

pub use inventory::{inventory_feed_xml, inventory_xml, InventoryUpdate};
pub use price::{price_feed_xml, PriceFeedOptions, PriceType, PriceUpdate};
pub use shipping::{shipping_xml, ShippingLine, ShippingOptions};

use crate::config::ClientConfig;
use crate::{Error, Result};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Thin element-nesting layer over `quick_xml::Writer`.
pub(crate) struct XmlDocument {
    writer: Writer<Vec<u8>>,
}

impl XmlDocument {
    pub(crate) fn new() -> Self {
        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(ClientConfig::XML_HEAD.as_bytes());
        Self {
            writer: Writer::new(buf),
        }
    }

    /// Write `<name attrs...>`, the body, then `</name>`.
    pub(crate) fn element<F>(&mut self, name: &str, attrs: &[(&str, &str)], body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let mut start = BytesStart::new(name);
        for attr in attrs {
            start.push_attribute(*attr);
        }
        self.writer.write_event(Event::Start(start)).map_err(xml_err)?;
        body(self)?;
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_err)
    }

    /// Write `<name>text</name>` with the text escaped.
    pub(crate) fn text_element(&mut self, name: &str, text: &str) -> Result<()> {
        self.element(name, &[], |doc| {
            doc.writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(xml_err)
        })
    }

    /// Write a self-closing `<name attrs.../>`.
    pub(crate) fn empty_element(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let mut start = BytesStart::new(name);
        for attr in attrs {
            start.push_attribute(*attr);
        }
        self.writer.write_event(Event::Empty(start)).map_err(xml_err)
    }

    pub(crate) fn finish(self) -> Result<String> {
        String::from_utf8(self.writer.into_inner()).map_err(xml_err)
    }
}

fn xml_err(e: impl std::fmt::Display) -> Error {
    Error::Xml {
        message: e.to_string(),
    }
}
