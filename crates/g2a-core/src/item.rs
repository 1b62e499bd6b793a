//! # Line Items
//!
//! Cart line item types for g2a-pay-rs.
//!
//! An item carries a signed `amount`, its full contribution to the cart
//! total. Regular items compute it as `unit_price * quantity`; discount
//! entries carry a negative amount directly.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A purchasable line item in a cart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Display name
    pub name: String,

    /// Merchant SKU, sent as the item id when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Unit price (negative for discount entries)
    pub unit_price: f64,

    /// Quantity
    pub quantity: u32,

    /// Total contribution to the cart: `unit_price * quantity`,
    /// or the signed discount amount
    pub amount: f64,

    /// Merchant-side metadata; not sent on the wire
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl LineItem {
    /// Create a line item with `amount = unit_price * quantity`
    pub fn new(name: impl Into<String>, unit_price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            sku: None,
            unit_price,
            quantity,
            amount: unit_price * quantity as f64,
            metadata: HashMap::new(),
        }
    }

    /// Builder: set merchant SKU
    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    /// Builder: add metadata
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Rebuild this item as a percentage discount of `base`.
    ///
    /// The resulting amount is `-(base * percent / 100)`; quantity is
    /// forced to 1 and the unit price mirrors the discount amount.
    pub fn into_percent_discount(self, base: f64, percent: f64) -> Self {
        let amount = -(base * percent / 100.0);
        Self {
            unit_price: amount,
            quantity: 1,
            amount,
            ..self
        }
    }

    /// Rebuild this item as a fixed discount.
    ///
    /// The input is sign-normalized: both `5.0` and `-5.0` yield an
    /// amount of `-5.0`.
    pub fn into_fixed_discount(self, amount: f64) -> Self {
        let amount = -amount.abs();
        Self {
            unit_price: amount,
            quantity: 1,
            amount,
            ..self
        }
    }

    /// Check whether this entry carries a negative (discount) amount
    pub fn is_discount(&self) -> bool {
        self.amount < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_is_price_times_quantity() {
        let item = LineItem::new("Gift card", 9.99, 3);
        assert_eq!(item.amount, 9.99 * 3.0);
        assert!(!item.is_discount());
    }

    #[test]
    fn test_sku_builder() {
        let item = LineItem::new("Gift card", 9.99, 1).with_sku("GC-0099");
        assert_eq!(item.sku.as_deref(), Some("GC-0099"));
    }

    #[test]
    fn test_metadata_builder() {
        let item = LineItem::new("Gift card", 9.99, 1).with_metadata("tier", "gold");
        assert_eq!(item.metadata.get("tier"), Some(&"gold".to_string()));
    }

    #[test]
    fn test_percent_discount() {
        let item = LineItem::new("Spring promo", 0.0, 1).into_percent_discount(200.0, 25.0);
        assert_eq!(item.amount, -50.0);
        assert_eq!(item.quantity, 1);
        assert!(item.is_discount());
    }

    #[test]
    fn test_fixed_discount_sign_normalized() {
        let positive = LineItem::new("Coupon", 0.0, 1).into_fixed_discount(5.0);
        let negative = LineItem::new("Coupon", 0.0, 1).into_fixed_discount(-5.0);

        assert_eq!(positive.amount, -5.0);
        assert_eq!(negative.amount, -5.0);
    }
}
