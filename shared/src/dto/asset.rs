//! # Asset Data Transfer Objects
//!
//! Read-only asset records supplied by the marketplace client. The card keeps
//! them only for the duration of one render pass.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A single collectible with display metadata and price history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(default)]
    pub token_id: Option<String>,
    #[serde(default)]
    pub token_address: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub opensea_link: String,
    #[serde(default)]
    pub collection: Option<Collection>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub traits: Vec<Trait>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sell_orders: Vec<Order>,
    #[serde(default)]
    pub last_sale: Option<LastSale>,
}

impl Asset {
    /// Name shown on the card; falls back to `#<tokenId>` for unnamed assets.
    pub fn display_name(&self) -> String {
        match (&self.name, &self.token_id) {
            (Some(name), _) if !name.is_empty() => name.clone(),
            (_, Some(token_id)) => format!("#{}", token_id),
            _ => String::new(),
        }
    }

    /// The active sell order, if the asset is listed.
    pub fn current_order(&self) -> Option<&Order> {
        self.sell_orders.first()
    }

    pub fn has_traits(&self) -> bool {
        !self.traits.is_empty()
    }
}

/// Collection the asset belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Trait tag as returned by the marketplace API (snake_case on the wire).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trait {
    pub trait_type: String,
    pub value: serde_json::Value,
    #[serde(default)]
    pub trait_count: Option<u64>,
}

/// Sell order (listing). Only the first order of an asset is displayed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub payment_token_contract: Option<PaymentToken>,
    #[serde(default)]
    pub current_price: Option<PriceAmount>,
}

/// Most recent completed sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LastSale {
    #[serde(default)]
    pub payment_token: Option<PaymentToken>,
    pub total_price: PriceAmount,
    #[serde(default)]
    pub event_timestamp: Option<String>,
}

impl LastSale {
    /// Calendar date of the sale.
    ///
    /// Accepts RFC 3339 timestamps and the API's zone-less
    /// `YYYY-MM-DDTHH:MM:SS[.f]` form. Unparseable timestamps yield `None`.
    pub fn sold_on(&self) -> Option<NaiveDate> {
        let raw = self.event_timestamp.as_deref()?;
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.date_naive());
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|ts| ts.date())
    }
}

/// Currency a price is denominated in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentToken {
    pub symbol: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub decimals: u32,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Raw price in the payment token's smallest unit.
///
/// Kept as text until formatted so that 18-decimal integer amounts survive
/// the trip through JSON without float rounding. Accepts JSON strings, JSON
/// numbers and the `{ "type": "BigNumber", "hex": "0x..." }` object form
/// (`_hex` is accepted too).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "AmountRepr")]
pub struct PriceAmount(String);

impl PriceAmount {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PriceAmount {
    fn default() -> Self {
        Self("0".to_string())
    }
}

impl From<&str> for PriceAmount {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Hex(HexAmount),
}

#[derive(Deserialize)]
struct HexAmount {
    #[serde(alias = "_hex")]
    hex: String,
}

impl HexAmount {
    /// Decimal digits of the hex value; unparseable text is kept so that
    /// formatting reports it as an invalid amount.
    fn into_decimal(self) -> String {
        let digits = self
            .hex
            .strip_prefix("0x")
            .or_else(|| self.hex.strip_prefix("0X"))
            .unwrap_or(&self.hex);
        match u128::from_str_radix(digits, 16) {
            Ok(value) => value.to_string(),
            Err(_) => self.hex,
        }
    }
}

impl From<AmountRepr> for PriceAmount {
    fn from(repr: AmountRepr) -> Self {
        match repr {
            AmountRepr::Text(text) => PriceAmount(text),
            AmountRepr::Unsigned(n) => PriceAmount(n.to_string()),
            AmountRepr::Signed(n) => PriceAmount(n.to_string()),
            AmountRepr::Float(f) => PriceAmount(f.to_string()),
            AmountRepr::Hex(hex) => PriceAmount(hex.into_decimal()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_asset() {
        let asset: Asset = serde_json::from_value(json!({
            "name": "Cool Cat #12",
            "traits": [],
            "openseaLink": "https://opensea.io/assets/1",
            "lastSale": null,
            "sellOrders": []
        }))
        .unwrap();

        assert_eq!(asset.display_name(), "Cool Cat #12");
        assert!(!asset.has_traits());
        assert!(asset.current_order().is_none());
        assert!(asset.last_sale.is_none());
        assert!(asset.collection.is_none());
    }

    #[test]
    fn test_collection_without_icon() {
        let asset: Asset = serde_json::from_value(json!({
            "openseaLink": "https://opensea.io/assets/1",
            "collection": { "name": "Cool Cats", "slug": "cool-cats-nft" }
        }))
        .unwrap();

        let collection = asset.collection.unwrap();
        assert_eq!(collection.slug, "cool-cats-nft");
        assert!(collection.image_url.is_none());
    }

    #[test]
    fn test_null_lists_become_empty() {
        let asset: Asset = serde_json::from_value(json!({
            "openseaLink": "https://opensea.io/assets/1",
            "collection": { "name": "Cool Cats", "slug": "cool-cats-nft" },
            "traits": null,
            "sellOrders": null
        }))
        .unwrap();

        assert!(asset.traits.is_empty());
        assert!(asset.sell_orders.is_empty());
    }

    #[test]
    fn test_display_name_fallback() {
        let asset: Asset = serde_json::from_value(json!({
            "tokenId": "4521",
            "name": null,
            "openseaLink": "https://opensea.io/assets/1",
            "collection": { "name": "Cool Cats", "slug": "cool-cats-nft" }
        }))
        .unwrap();

        assert_eq!(asset.display_name(), "#4521");
    }

    #[test]
    fn test_price_amount_accepts_numbers() {
        let text: PriceAmount = serde_json::from_value(json!("1000000000000000000")).unwrap();
        let number: PriceAmount = serde_json::from_value(json!(1000000000000000000u64)).unwrap();
        let float: PriceAmount = serde_json::from_value(json!(1.5)).unwrap();

        assert_eq!(text.as_str(), "1000000000000000000");
        assert_eq!(number.as_str(), "1000000000000000000");
        assert_eq!(float.as_str(), "1.5");
    }

    #[test]
    fn test_price_amount_accepts_big_number_objects() {
        let order: Order = serde_json::from_value(json!({
            "paymentTokenContract": { "symbol": "ETH", "decimals": 18 },
            "currentPrice": { "type": "BigNumber", "hex": "0x0de0b6b3a7640000" }
        }))
        .unwrap();
        assert_eq!(order.current_price.unwrap().as_str(), "1000000000000000000");

        let legacy: PriceAmount = serde_json::from_value(json!({ "_hex": "0x01" })).unwrap();
        assert_eq!(legacy.as_str(), "1");

        let garbage: PriceAmount = serde_json::from_value(json!({ "hex": "0xzz" })).unwrap();
        assert_eq!(garbage.as_str(), "0xzz");
    }

    #[test]
    fn test_sold_on_formats() {
        let sale = |ts: &str| LastSale {
            payment_token: None,
            total_price: PriceAmount::default(),
            event_timestamp: Some(ts.to_string()),
        };

        let expected = NaiveDate::from_ymd_opt(2021, 3, 1);
        assert_eq!(sale("2021-03-01T12:30:00").sold_on(), expected);
        assert_eq!(sale("2021-03-01T12:30:00.123456").sold_on(), expected);
        assert_eq!(sale("2021-03-01T12:30:00Z").sold_on(), expected);
        assert_eq!(sale("yesterday").sold_on(), None);
    }
}
