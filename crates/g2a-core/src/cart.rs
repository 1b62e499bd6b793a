//! # Cart
//!
//! Ordered line-item list with a running total.
//!
//! The total is maintained incrementally on each addition, never recomputed
//! from scratch. Item order is preserved for payload fidelity; it has no
//! effect on pricing.

use crate::item::LineItem;
use serde::{Deserialize, Serialize};

/// An ordered collection of line items plus their running total
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
    total_price: f64,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item and add its amount to the running total
    pub fn add_item(&mut self, item: LineItem) -> &mut Self {
        self.total_price += item.amount;
        self.items.push(item);
        self
    }

    /// Add a percentage discount entry.
    ///
    /// The discount is `(total_price / 100) * percent`, evaluated against
    /// the total at the moment of the call; items added afterwards do not
    /// re-price it. On an empty cart this yields a zero discount.
    pub fn add_percent_discount(&mut self, item: LineItem, percent: f64) -> &mut Self {
        let discount = item.into_percent_discount(self.total_price, percent);
        self.add_item(discount)
    }

    /// Add a fixed discount entry; the amount is sign-normalized to negative
    pub fn add_fixed_discount(&mut self, item: LineItem, amount: f64) -> &mut Self {
        let discount = item.into_fixed_discount(amount);
        self.add_item(discount)
    }

    /// Items in insertion order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Running total of all item amounts (may be negative)
    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Check if the cart has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of entries (discounts included)
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
