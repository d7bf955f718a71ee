//! Report endpoints.

use super::client::MarketplaceClient;
use super::query::QueryString;
use super::transport::{ApiResponse, RequestBody};
use crate::report::extract_report;
use crate::Result;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Downloadable report types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Item,
    BuyBox,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Item => "item",
            ReportKind::BuyBox => "buybox",
        }
    }
}

/// A report response together with the file extracted from it.
///
/// `data` is `None` when the marketplace answered with a non-success status;
/// the error body is left untouched in `response`.
#[derive(Debug, Clone)]
pub struct ReportContents {
    pub response: ApiResponse,
    pub data: Option<Vec<u8>>,
}

impl MarketplaceClient {
    /// Fetch a zipped report as-is.
    ///
    /// `GET v2/getReport?type={kind}`
    pub fn get_report(&self, kind: ReportKind) -> Result<ApiResponse> {
        let query = QueryString::new().param("type", kind.as_str());
        let url = self.endpoint_with_query(&["v2", "getReport"], query)?;
        self.execute(Method::GET, url, RequestBody::Empty, true)
    }

    /// Fetch a report and unpack the file inside the archive.
    ///
    /// Only successful responses are unpacked. A success body that is not a
    /// valid archive fails with [`crate::Error::Archive`].
    pub fn get_report_contents(&self, kind: ReportKind) -> Result<ReportContents> {
        let response = self.get_report(kind)?;
        let data = if response.is_success() {
            Some(extract_report(&response.body)?)
        } else {
            None
        };
        Ok(ReportContents { response, data })
    }

    pub fn get_item_report(&self) -> Result<ReportContents> {
        self.get_report_contents(ReportKind::Item)
    }

    pub fn get_buy_box_report(&self) -> Result<ReportContents> {
        self.get_report_contents(ReportKind::BuyBox)
    }
}
