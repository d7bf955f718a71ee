//! Inventory endpoints.

use super::client::MarketplaceClient;
use super::query::QueryString;
use super::transport::{ApiResponse, RequestBody};
use crate::feeds::{inventory_feed_xml, inventory_xml, InventoryUpdate};
use crate::Result;
use reqwest::Method;
use tracing::info;

/// Default `InventoryHeader` version for bulk feeds.
pub const DEFAULT_INVENTORY_FEED_VERSION: &str = "1.4";

impl MarketplaceClient {
    /// `GET v3/inventory?sku={sku}`
    pub fn get_inventory(&self, sku: &str) -> Result<ApiResponse> {
        let query = QueryString::new().param("sku", sku);
        let url = self.endpoint_with_query(&["v3", "inventory"], query)?;
        self.execute(Method::GET, url, RequestBody::Empty, false)
    }

    /// Set the quantity for one SKU.
    ///
    /// `PUT v3/inventory?sku={sku}`
    pub fn update_inventory(&self, update: &InventoryUpdate) -> Result<ApiResponse> {
        let xml = inventory_xml(update)?;
        let query = QueryString::new().param("sku", &update.sku);
        let url = self.endpoint_with_query(&["v3", "inventory"], query)?;
        self.execute(Method::PUT, url, RequestBody::Xml(xml), true)
    }

    /// Upload an inventory feed as `bulk.xml`.
    ///
    /// `POST v3/feeds?feedType=inventory`
    pub fn bulk_update_inventory(
        &self,
        updates: &[InventoryUpdate],
        version: &str,
    ) -> Result<ApiResponse> {
        let content = inventory_feed_xml(updates, version)?;
        let query = QueryString::new().param("feedType", "inventory");
        let url = self.endpoint_with_query(&["v3", "feeds"], query)?;

        info!(items = updates.len(), version, "Uploading inventory feed");

        self.execute(
            Method::POST,
            url,
            RequestBody::Multipart {
                file_name: "bulk.xml".to_string(),
                content,
            },
            false,
        )
    }
}
