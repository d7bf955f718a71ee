//! Item endpoints.

use super::client::MarketplaceClient;
use super::query::QueryString;
use super::transport::{ApiResponse, RequestBody};
use crate::Result;
use reqwest::Method;

impl MarketplaceClient {
    /// `GET v2/items/{sku}`
    pub fn get_item(&self, sku: &str) -> Result<ApiResponse> {
        let url = self.endpoint(&["v2", "items", sku])?;
        self.execute(Method::GET, url, RequestBody::Empty, false)
    }

    /// `GET v2/items?sku=&limit={limit}&offset={offset}`
    pub fn get_all_items(&self, offset: u32, limit: u32) -> Result<ApiResponse> {
        let query = QueryString::new()
            .param("sku", "")
            .param("limit", limit)
            .param("offset", offset);
        let url = self.endpoint_with_query(&["v2", "items"], query)?;
        self.execute(Method::GET, url, RequestBody::Empty, false)
    }

    /// `DELETE v2/items/{sku}`
    pub fn retire_item(&self, sku: &str) -> Result<ApiResponse> {
        let url = self.endpoint(&["v2", "items", sku])?;
        self.execute(Method::DELETE, url, RequestBody::Empty, false)
    }
}
