//! Marketplace API client and its endpoint groups.

pub mod client;
pub mod headers;
pub mod inventory;
pub mod items;
pub mod orders;
pub mod prices;
mod query;
pub mod reports;
pub mod transport;

pub use client::MarketplaceClient;
pub use orders::{OrderStatus, OrdersQuery, ReleasedOrdersQuery};
pub use reports::{ReportContents, ReportKind};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, ReqwestTransport, RequestBody};
