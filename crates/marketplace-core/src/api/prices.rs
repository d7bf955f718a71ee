//! Price endpoints.

use super::client::MarketplaceClient;
use super::query::QueryString;
use super::transport::{ApiResponse, RequestBody};
use crate::feeds::{price_feed_xml, PriceFeedOptions, PriceUpdate};
use crate::Result;
use reqwest::Method;
use rust_decimal::Decimal;
use tracing::info;

impl MarketplaceClient {
    /// Update the price of a single SKU.
    ///
    /// `PUT v2/prices?sku={sku}&currency={currency}&price={price}`
    pub fn update_price(&self, sku: &str, price: Decimal, currency: &str) -> Result<ApiResponse> {
        let query = QueryString::new()
            .param("sku", sku)
            .param("currency", currency)
            .param("price", price);
        let url = self.endpoint_with_query(&["v2", "prices"], query)?;
        self.execute(Method::PUT, url, RequestBody::Empty, false)
    }

    /// Upload a price feed as `pricing.xml`.
    ///
    /// `POST v3/feeds?feedType=price`
    pub fn bulk_update_price(
        &self,
        items: &[PriceUpdate],
        options: &PriceFeedOptions,
    ) -> Result<ApiResponse> {
        let content = price_feed_xml(items, options)?;
        let query = QueryString::new().param("feedType", "price");
        let url = self.endpoint_with_query(&["v3", "feeds"], query)?;

        info!(items = items.len(), version = %options.version, "Uploading price feed");

        self.execute(
            Method::POST,
            url,
            RequestBody::Multipart {
                file_name: "pricing.xml".to_string(),
                content,
            },
            false,
        )
    }
}
