//! Order endpoints.

use super::client::MarketplaceClient;
use super::query::QueryString;
use super::transport::{ApiResponse, RequestBody};
use crate::feeds::{shipping_xml, ShippingLine, ShippingOptions};
use crate::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Default page size for order listings.
pub const DEFAULT_ORDER_LIMIT: u32 = 200;

/// Purchase order status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Created,
    Acknowledged,
    Shipped,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Created => "Created",
            OrderStatus::Acknowledged => "Acknowledged",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// Filters for `GET v3/orders`. Unset fields are left out of the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdersQuery {
    pub sku: Option<String>,
    pub customer_order_id: Option<String>,
    pub purchase_order_id: Option<String>,
    pub status: Option<OrderStatus>,
    pub created_start_date: Option<DateTime<Utc>>,
    pub created_end_date: Option<DateTime<Utc>>,
    pub from_expected_ship_date: Option<DateTime<Utc>>,
    pub to_expected_ship_date: Option<DateTime<Utc>>,
    pub limit: Option<u32>,
    /// `nextCursor` value from a previous page, leading `?` included.
    pub next_cursor: Option<String>,
}

impl Default for OrdersQuery {
    fn default() -> Self {
        Self {
            sku: None,
            customer_order_id: None,
            purchase_order_id: None,
            status: None,
            created_start_date: None,
            created_end_date: None,
            from_expected_ship_date: None,
            to_expected_ship_date: None,
            limit: Some(DEFAULT_ORDER_LIMIT),
            next_cursor: None,
        }
    }
}

/// Filters for `GET v3/orders/released` (created, not yet acknowledged).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasedOrdersQuery {
    pub created_start_date: Option<DateTime<Utc>>,
    pub limit: Option<u32>,
    pub next_cursor: Option<String>,
}

impl Default for ReleasedOrdersQuery {
    fn default() -> Self {
        Self {
            created_start_date: None,
            limit: Some(DEFAULT_ORDER_LIMIT),
            next_cursor: None,
        }
    }
}

/// A zero limit is treated as unset.
fn page_limit(limit: Option<u32>) -> Option<u32> {
    limit.filter(|limit| *limit > 0)
}

fn iso8601(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Append a continuation cursor.
///
/// Cursors come back from the marketplace already encoded and prefixed with
/// `?`; the prefix is dropped and the rest is sent untouched.
fn with_cursor(query: QueryString, cursor: Option<&str>) -> QueryString {
    match cursor {
        Some(cursor) if !cursor.is_empty() => {
            query.raw("nextCursor", cursor.strip_prefix('?').unwrap_or(cursor))
        }
        _ => query,
    }
}

impl MarketplaceClient {
    /// `GET v3/orders/{purchase_order_id}`
    pub fn get_order(&self, purchase_order_id: &str) -> Result<ApiResponse> {
        let url = self.endpoint(&["v3", "orders", purchase_order_id])?;
        self.execute(Method::GET, url, RequestBody::Empty, false)
    }

    /// List released orders only; acknowledged orders are not included.
    ///
    /// `GET v3/orders/released?limit=..&nextCursor=..&createdStartDate=..`
    pub fn get_all_released_orders(&self, query: &ReleasedOrdersQuery) -> Result<ApiResponse> {
        let params = QueryString::new().optional("limit", page_limit(query.limit));
        let params = with_cursor(params, query.next_cursor.as_deref())
            .optional("createdStartDate", query.created_start_date.as_ref().map(iso8601));

        let url = self.endpoint_with_query(&["v3", "orders", "released"], params)?;
        self.execute(Method::GET, url, RequestBody::Empty, false)
    }

    /// `GET v3/orders?...`
    pub fn get_all_orders(&self, query: &OrdersQuery) -> Result<ApiResponse> {
        let params = QueryString::new()
            .optional("sku", query.sku.as_deref())
            .optional("customerOrderId", query.customer_order_id.as_deref())
            .optional("purchaseOrderId", query.purchase_order_id.as_deref())
            .optional("status", query.status.map(|s| s.as_str()))
            .optional("createdStartDate", query.created_start_date.as_ref().map(iso8601))
            .optional("createdEndDate", query.created_end_date.as_ref().map(iso8601))
            .optional(
                "fromExpectedShipDate",
                query.from_expected_ship_date.as_ref().map(iso8601),
            )
            .optional(
                "toExpectedShipDate",
                query.to_expected_ship_date.as_ref().map(iso8601),
            )
            .optional("limit", page_limit(query.limit));
        let params = with_cursor(params, query.next_cursor.as_deref());

        let url = self.endpoint_with_query(&["v3", "orders"], params)?;
        self.execute(Method::GET, url, RequestBody::Empty, false)
    }

    /// `POST v3/orders/{purchase_order_id}/acknowledge`
    pub fn ack_order(&self, purchase_order_id: &str) -> Result<ApiResponse> {
        let url = self.endpoint(&["v3", "orders", purchase_order_id, "acknowledge"])?;
        info!(purchase_order_id, "Acknowledging order");
        self.execute(Method::POST, url, RequestBody::Empty, true)
    }

    /// Send shipping updates for the lines of a purchase order.
    ///
    /// `POST v3/orders/{purchase_order_id}/shipping`
    pub fn update_shipping(
        &self,
        purchase_order_id: &str,
        lines: &[ShippingLine],
        options: &ShippingOptions,
    ) -> Result<ApiResponse> {
        let xml = shipping_xml(lines, options)?;
        let url = self.endpoint(&["v3", "orders", purchase_order_id, "shipping"])?;
        info!(purchase_order_id, lines = lines.len(), "Updating shipping");
        self.execute(Method::POST, url, RequestBody::Xml(xml), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::{assert_signed, ok_response, test_client};
    use crate::api::transport::MockHttpTransport;
    use chrono::TimeZone;

    fn expect_get(url: &'static str) -> MockHttpTransport {
        let mut transport = MockHttpTransport::new();
        transport.expect_send().times(1).returning(move |request| {
            assert_eq!(request.method, Method::GET);
            assert_eq!(request.url.as_str(), url);
            assert_signed(&request);
            Ok(ok_response(200, b""))
        });
        transport
    }

    #[test]
    fn test_get_order() {
        let transport = expect_get("https://marketplace.walmartapis.com/v3/orders/1796277083022");
        test_client(transport).get_order("1796277083022").unwrap();
    }

    #[test]
    fn test_released_orders_default() {
        let transport =
            expect_get("https://marketplace.walmartapis.com/v3/orders/released?limit=200");
        test_client(transport)
            .get_all_released_orders(&ReleasedOrdersQuery::default())
            .unwrap();
    }

    #[test]
    fn test_released_orders_with_cursor_and_date() {
        let transport = expect_get(
            "https://marketplace.walmartapis.com/v3/orders/released?limit=10&nextCursor=limit=10&hasMoreElements=true&soIndex=20&createdStartDate=2024-01-02T03%3A04%3A05Z",
        );
        let query = ReleasedOrdersQuery {
            created_start_date: Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
            limit: Some(10),
            next_cursor: Some("?limit=10&hasMoreElements=true&soIndex=20".to_string()),
        };
        test_client(transport).get_all_released_orders(&query).unwrap();
    }

    #[test]
    fn test_all_orders_parameter_order() {
        let transport = expect_get(
            "https://marketplace.walmartapis.com/v3/orders?sku=SKU-1&purchaseOrderId=PO1&status=Acknowledged&toExpectedShipDate=2024-02-01T00%3A00%3A00Z&limit=50",
        );
        let query = OrdersQuery {
            sku: Some("SKU-1".to_string()),
            purchase_order_id: Some("PO1".to_string()),
            status: Some(OrderStatus::Acknowledged),
            to_expected_ship_date: Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()),
            limit: Some(50),
            ..Default::default()
        };
        test_client(transport).get_all_orders(&query).unwrap();
    }

    #[test]
    fn test_all_orders_without_limit() {
        let transport = expect_get("https://marketplace.walmartapis.com/v3/orders");
        let query = OrdersQuery {
            limit: None,
            ..Default::default()
        };
        test_client(transport).get_all_orders(&query).unwrap();
    }

    #[test]
    fn test_zero_limit_is_omitted() {
        let transport = expect_get("https://marketplace.walmartapis.com/v3/orders?status=Created");
        let query = OrdersQuery {
            status: Some(OrderStatus::Created),
            limit: Some(0),
            ..Default::default()
        };
        test_client(transport).get_all_orders(&query).unwrap();

        let transport = expect_get("https://marketplace.walmartapis.com/v3/orders/released");
        let query = ReleasedOrdersQuery {
            limit: Some(0),
            ..Default::default()
        };
        test_client(transport).get_all_released_orders(&query).unwrap();
    }

    #[test]
    fn test_ack_order() {
        let mut transport = MockHttpTransport::new();
        transport.expect_send().times(1).returning(|request| {
            assert_eq!(request.method, Method::POST);
            assert_eq!(
                request.url.as_str(),
                "https://marketplace.walmartapis.com/v3/orders/PO1/acknowledge"
            );
            assert_eq!(request.headers["content-type"], "application/xml");
            assert_eq!(request.body, RequestBody::Empty);
            assert_signed(&request);
            Ok(ok_response(200, b""))
        });

        test_client(transport).ack_order("PO1").unwrap();
    }

    #[test]
    fn test_update_shipping() {
        let mut transport = MockHttpTransport::new();
        transport.expect_send().times(1).returning(|request| {
            assert_eq!(request.method, Method::POST);
            assert_eq!(
                request.url.as_str(),
                "https://marketplace.walmartapis.com/v3/orders/PO1/shipping"
            );
            assert_eq!(request.headers["content-type"], "application/xml");
            match &request.body {
                RequestBody::Xml(xml) => {
                    assert!(xml.contains("<ns2:lineNumber>3</ns2:lineNumber>"));
                    assert!(xml.contains("<ns2:carrier>FedEx</ns2:carrier>"));
                }
                other => panic!("expected XML body, got {:?}", other),
            }
            assert_signed(&request);
            Ok(ok_response(200, b""))
        });

        let lines = vec![ShippingLine {
            line_number: 3,
            status: None,
            quantity: 2,
            unit_of_measurement: None,
            ship_date_time: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            carrier_name: "FedEx".to_string(),
            method_code: "Express".to_string(),
            tracking_number: "7777".to_string(),
            tracking_url: None,
        }];
        test_client(transport)
            .update_shipping("PO1", &lines, &ShippingOptions::default())
            .unwrap();
    }

    #[test]
    fn test_cursor_without_prefix_is_kept() {
        let query = with_cursor(QueryString::new(), Some("soIndex=5"));
        let mut url = url::Url::parse("https://example.com/v3/orders").unwrap();
        query.apply(&mut url);
        assert_eq!(url.query(), Some("nextCursor=soIndex=5"));
    }
}
