//! Bulk price feed (`PriceFeed` document).

use super::XmlDocument;
use crate::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Namespace bound to the `gmp` prefix on the feed root.
const PRICE_FEED_NAMESPACE: &str = "http://walmart.com/";

/// Kind of current price being published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceType {
    Base,
    Reduced,
    Clearance,
}

impl PriceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceType::Base => "BASE",
            PriceType::Reduced => "REDUCED",
            PriceType::Clearance => "CLEARANCE",
        }
    }
}

/// One SKU row in a price feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceUpdate {
    pub sku: String,
    pub current_price: Decimal,
    /// Falls back to [`PriceFeedOptions::currency`].
    #[serde(default)]
    pub currency: Option<String>,
    /// Falls back to [`PriceFeedOptions::current_price_type`].
    #[serde(default)]
    pub current_price_type: Option<PriceType>,
    /// "Was" price shown next to the current price.
    #[serde(default)]
    pub comparison_price: Option<Decimal>,
}

impl PriceUpdate {
    pub fn new(sku: impl Into<String>, current_price: Decimal) -> Self {
        Self {
            sku: sku.into(),
            current_price,
            currency: None,
            current_price_type: None,
            comparison_price: None,
        }
    }
}

/// Feed-level settings and per-row defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceFeedOptions {
    pub version: String,
    pub currency: String,
    pub current_price_type: Option<PriceType>,
}

impl Default for PriceFeedOptions {
    fn default() -> Self {
        Self {
            version: "1.5".to_string(),
            currency: "USD".to_string(),
            current_price_type: None,
        }
    }
}

/// Render a `PriceFeed` document.
pub fn price_feed_xml(items: &[PriceUpdate], options: &PriceFeedOptions) -> Result<String> {
    let mut doc = XmlDocument::new();

    doc.element("PriceFeed", &[("xmlns:gmp", PRICE_FEED_NAMESPACE)], |doc| {
        doc.element("PriceHeader", &[], |doc| {
            doc.text_element("version", &options.version)
        })?;

        for item in items {
            let currency = item.currency.as_deref().unwrap_or(&options.currency);
            let price_type = item.current_price_type.or(options.current_price_type);

            doc.element("Price", &[], |doc| {
                doc.element("itemIdentifier", &[], |doc| {
                    doc.text_element("sku", &item.sku)
                })?;
                doc.element("pricingList", &[], |doc| {
                    doc.element("pricing", &[], |doc| {
                        let amount = item.current_price.to_string();
                        doc.element("currentPrice", &[], |doc| {
                            doc.empty_element(
                                "value",
                                &[("currency", currency), ("amount", amount.as_str())],
                            )
                        })?;
                        if let Some(price_type) = price_type {
                            doc.text_element("currentPriceType", price_type.as_str())?;
                        }
                        if let Some(comparison) = item.comparison_price {
                            let amount = comparison.to_string();
                            doc.element("comparisonPrice", &[], |doc| {
                                doc.empty_element(
                                    "value",
                                    &[("currency", currency), ("amount", amount.as_str())],
                                )
                            })?;
                        }
                        Ok(())
                    })
                })
            })?;
        }
        Ok(())
    })?;

    doc.finish()
}
