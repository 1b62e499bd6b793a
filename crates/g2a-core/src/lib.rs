//! # g2a-core
//!
//! Core types for the g2a-pay-rs checkout client.
//!
//! This crate provides:
//! - `LineItem` for purchasable items and discount entries
//! - `Cart` for the ordered item list with a running total
//! - `Currency` for the ISO 4217 codes the gateway accepts
//! - `GatewayError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use g2a_core::{Cart, LineItem};
//!
//! let mut cart = Cart::new();
//! cart.add_item(LineItem::new("Gift card", 19.99, 1).with_sku("GC-0020"));
//! cart.add_percent_discount(LineItem::new("Spring promo", 0.0, 1), 10.0);
//!
//! assert_eq!(cart.total_price(), 19.99 * 0.9);
//! ```

pub mod cart;
pub mod currency;
pub mod error;
pub mod item;

// Re-exports for convenience
pub use cart::Cart;
pub use currency::Currency;
pub use error::{GatewayError, GatewayResult};
pub use item::LineItem;
