//! Frontend Models
//!
//! Data structures matching the cart endpoints' JSON.

use serde::{Deserialize, Deserializer, Serialize};

/// Sale type the backend assumes when a line item carries none
pub const DEFAULT_SALE_TYPE: u32 = 1;

/// Product identifier.
///
/// The backend sends it as a number or as a string depending on how the
/// session entry was stored, and the page carries it as attribute text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Float(f64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => ProductId(n.to_string()),
            RawId::Float(n) => ProductId(n.to_string()),
            RawId::Text(s) => ProductId(s),
        })
    }
}

/// Identity of a cart entry for update/remove
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    pub product_id: ProductId,
    pub detail: String,
    pub sale_type: Option<u32>,
}

impl LineKey {
    pub fn new(product_id: ProductId, detail: impl Into<String>, sale_type: Option<u32>) -> Self {
        Self {
            product_id,
            detail: detail.into(),
            sale_type,
        }
    }
}

/// One distinct entry in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: ProductId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub detail: String,
    #[serde(default)]
    pub sale_type: Option<u32>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub total_price: f64,
    /// Unit price, informational only
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub final_price: Option<f64>,
    /// Backend session key of the entry
    #[serde(default)]
    pub key: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

/// Accepts an explicit `null` where a plain value is expected
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl CartLineItem {
    pub fn sale_type_or_default(&self) -> u32 {
        self.sale_type.unwrap_or(DEFAULT_SALE_TYPE)
    }

    /// Image URL, treating an empty string as missing
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.is_empty())
    }
}

/// Server's authoritative view of the cart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    #[serde(default)]
    pub cart_count: u32,
    #[serde(default)]
    pub total_price: f64,
    /// `None` when the endpoint did not send a list at all
    #[serde(default)]
    pub items: Option<Vec<CartLineItem>>,
}

/// Envelope returned by every cart endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CartResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub snapshot: CartSnapshot,
}

/// Result of a cart call the server understood
#[derive(Debug, Clone, PartialEq)]
pub enum CartOutcome {
    Accepted {
        snapshot: CartSnapshot,
        message: Option<String>,
    },
    Rejected {
        error: Option<String>,
    },
}

impl CartResponse {
    pub fn into_outcome(self) -> CartOutcome {
        if self.success {
            CartOutcome::Accepted {
                snapshot: self.snapshot,
                message: self.message.filter(|m| !m.is_empty()),
            }
        } else {
            CartOutcome::Rejected {
                error: self.error.filter(|e| !e.is_empty()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_response() {
        let json = r#"{
            "success": true,
            "cart_count": 2,
            "total_price": 100000,
            "items": [{"id": 42, "name": "Widget", "detail": "", "sale_type": 1, "quantity": 2, "total_price": 100000}]
        }"#;
        let response: CartResponse = serde_json::from_str(json).unwrap();

        assert!(response.success);
        assert_eq!(response.snapshot.cart_count, 2);
        assert_eq!(response.snapshot.total_price, 100000.0);
        let items = response.snapshot.items.as_ref().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, ProductId::new("42"));
        assert_eq!(items[0].quantity, 2);
    }

    #[test]
    fn test_string_product_id_and_missing_sale_type() {
        let json = r#"{"id": "17", "name": "Mug", "image": "", "detail": "red", "quantity": 1, "total_price": 5.5, "key": "17:red"}"#;
        let item: CartLineItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.id, ProductId::new("17"));
        assert_eq!(item.sale_type_or_default(), 1);
        assert_eq!(item.image_url(), None);
        assert_eq!(item.key.as_deref(), Some("17:red"));
    }

    #[test]
    fn test_null_detail_and_name_decode_as_empty() {
        let json = r#"{
            "success": true,
            "cart_count": 1,
            "total_price": 900,
            "items": [{"id": 3, "name": null, "detail": null, "quantity": 1, "total_price": 900}]
        }"#;
        let response: CartResponse = serde_json::from_str(json).unwrap();

        let items = response.snapshot.items.unwrap();
        assert_eq!(items[0].detail, "");
        assert_eq!(items[0].name, "");
        assert_eq!(items[0].id, ProductId::new("3"));
    }

    #[test]
    fn test_rejected_response_outcome() {
        let response: CartResponse =
            serde_json::from_str(r#"{"success": false, "error": "stock unavailable"}"#).unwrap();
        assert_eq!(
            response.into_outcome(),
            CartOutcome::Rejected { error: Some("stock unavailable".to_string()) }
        );

        let response: CartResponse = serde_json::from_str(r#"{"success": false, "error": ""}"#).unwrap();
        assert_eq!(response.into_outcome(), CartOutcome::Rejected { error: None });
    }

    #[test]
    fn test_count_only_response_has_no_items() {
        let response: CartResponse =
            serde_json::from_str(r#"{"success": true, "cart_count": 3, "total_price": 0}"#).unwrap();
        match response.into_outcome() {
            CartOutcome::Accepted { snapshot, message } => {
                assert_eq!(snapshot.cart_count, 3);
                assert!(snapshot.items.is_none());
                assert!(message.is_none());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
