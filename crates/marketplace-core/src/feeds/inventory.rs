//! Inventory documents: single-SKU `wm:inventory` and bulk `InventoryFeed`.

use super::XmlDocument;
use crate::Result;
use serde::{Deserialize, Serialize};

const INVENTORY_NAMESPACE: &str = "http://walmart.com/";

/// Quantity on hand for one SKU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryUpdate {
    pub sku: String,
    pub amount: u32,
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Fulfillment lag time in days.
    #[serde(default = "default_lag_time")]
    pub lag_time: u32,
}

fn default_unit() -> String {
    "EACH".to_string()
}

fn default_lag_time() -> u32 {
    2
}

impl InventoryUpdate {
    /// New update with unit `EACH` and a two-day lag time.
    pub fn new(sku: impl Into<String>, amount: u32) -> Self {
        Self {
            sku: sku.into(),
            amount,
            unit: default_unit(),
            lag_time: default_lag_time(),
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_lag_time(mut self, lag_time: u32) -> Self {
        self.lag_time = lag_time;
        self
    }
}

/// Render the single-item `wm:inventory` document.
pub fn inventory_xml(update: &InventoryUpdate) -> Result<String> {
    let mut doc = XmlDocument::new();
    let amount = update.amount.to_string();
    let lag_time = update.lag_time.to_string();

    doc.element("wm:inventory", &[("xmlns:wm", INVENTORY_NAMESPACE)], |doc| {
        doc.text_element("wm:sku", &update.sku)?;
        doc.element("wm:quantity", &[], |doc| {
            doc.text_element("wm:unit", &update.unit)?;
            doc.text_element("wm:amount", &amount)
        })?;
        doc.text_element("wm:fulfillmentLagTime", &lag_time)
    })?;

    doc.finish()
}

/// Render a bulk `InventoryFeed` document.
pub fn inventory_feed_xml(updates: &[InventoryUpdate], version: &str) -> Result<String> {
    let mut doc = XmlDocument::new();

    doc.element("InventoryFeed", &[("xmlns", INVENTORY_NAMESPACE)], |doc| {
        doc.element("InventoryHeader", &[], |doc| doc.text_element("version", version))?;

        for update in updates {
            doc.element("inventory", &[], |doc| {
                doc.text_element("sku", &update.sku)?;
                doc.element("quantity", &[], |doc| {
                    doc.text_element("unit", &update.unit)?;
                    doc.text_element("amount", &update.amount.to_string())
                })?;
                doc.text_element("fulfillmentLagTime", &update.lag_time.to_string())
            })?;
        }
        Ok(())
    })?;

    doc.finish()
}
