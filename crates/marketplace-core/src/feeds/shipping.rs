//! Order shipment notification (`ns2:orderShipment` document).

use super::XmlDocument;
use crate::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

const ORDERS_NAMESPACE: &str = "http://walmart.com/mp/v3/orders";
const MARKETPLACE_NAMESPACE: &str = "http://walmart.com/";

/// Shipment details for one order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingLine {
    pub line_number: u32,
    /// Falls back to [`ShippingOptions::status`].
    #[serde(default)]
    pub status: Option<String>,
    pub quantity: u32,
    /// Falls back to [`ShippingOptions::unit_of_measurement`].
    #[serde(default)]
    pub unit_of_measurement: Option<String>,
    pub ship_date_time: DateTime<Utc>,
    pub carrier_name: String,
    pub method_code: String,
    pub tracking_number: String,
    #[serde(default)]
    pub tracking_url: Option<String>,
}

/// Defaults applied to lines that leave status or unit unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingOptions {
    pub status: String,
    pub unit_of_measurement: String,
}

impl Default for ShippingOptions {
    fn default() -> Self {
        Self {
            status: "Shipped".to_string(),
            unit_of_measurement: "EACH".to_string(),
        }
    }
}

/// Render the shipping update document for a purchase order.
pub fn shipping_xml(lines: &[ShippingLine], options: &ShippingOptions) -> Result<String> {
    let mut doc = XmlDocument::new();

    doc.element(
        "ns2:orderShipment",
        &[("xmlns:ns2", ORDERS_NAMESPACE), ("xmlns:ns3", MARKETPLACE_NAMESPACE)],
        |doc| {
            doc.element("ns2:orderLines", &[], |doc| {
                for line in lines {
                    write_order_line(doc, line, options)?;
                }
                Ok(())
            })
        },
    )?;

    doc.finish()
}

fn write_order_line(
    doc: &mut XmlDocument,
    line: &ShippingLine,
    options: &ShippingOptions,
) -> Result<()> {
    let status = line.status.as_deref().unwrap_or(&options.status);
    let unit = line
        .unit_of_measurement
        .as_deref()
        .unwrap_or(&options.unit_of_measurement);
    let ship_date_time = line
        .ship_date_time
        .to_rfc3339_opts(SecondsFormat::Millis, true);

    doc.element("ns2:orderLine", &[], |doc| {
        doc.text_element("ns2:lineNumber", &line.line_number.to_string())?;
        doc.element("ns2:orderLineStatuses", &[], |doc| {
            doc.element("ns2:orderLineStatus", &[], |doc| {
                doc.text_element("ns2:status", status)?;
                doc.element("ns2:statusQuantity", &[], |doc| {
                    doc.text_element("ns2:unitOfMeasurement", unit)?;
                    doc.text_element("ns2:amount", &line.quantity.to_string())
                })?;
                doc.element("ns2:trackingInfo", &[], |doc| {
                    doc.text_element("ns2:shipDateTime", &ship_date_time)?;
                    doc.element("ns2:carrierName", &[], |doc| {
                        doc.text_element("ns2:carrier", &line.carrier_name)
                    })?;
                    doc.text_element("ns2:methodCode", &line.method_code)?;
                    doc.text_element("ns2:trackingNumber", &line.tracking_number)?;
                    if let Some(url) = &line.tracking_url {
                        doc.text_element("ns2:trackingURL", url)?;
                    }
                    Ok(())
                })
            })
        })
    })
}
