//! # g2a-gateway
//!
//! G2A Pay hosted-checkout client for g2a-pay-rs.
//!
//! This crate covers the three legs of the gateway protocol:
//!
//! 1. **Quote creation** - build a signed createQuote request from a cart
//!    and obtain the hosted payment page URL to redirect the customer to.
//! 2. **Authorized REST calls** - merchant API requests (transaction
//!    details, refunds) carrying the static credential hash.
//! 3. **IPN verification** - recompute and check the hash on inbound
//!    payment notifications before trusting them.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use g2a_core::LineItem;
//! use g2a_gateway::{Checkout, GatewayClient};
//!
//! // Credentials from G2A_API_HASH / G2A_API_SECRET / G2A_MERCHANT_EMAIL
//! let client = GatewayClient::from_env()?;
//!
//! let mut checkout = Checkout::new(1001)
//!     .with_success_url("https://shop.example/ok")
//!     .with_failure_url("https://shop.example/fail")
//!     .with_item(LineItem::new("Gift card", 19.99, 1));
//!
//! // First call hits the gateway; later calls return the cached URL
//! let url = client.redirect_url(&mut checkout).await?;
//! ```
//!
//! ## IPN Handling
//!
//! ```rust,ignore
//! use g2a_gateway::IpnNotification;
//!
//! // In your notification endpoint:
//! let ipn: IpnNotification = parse_form(body)?;
//! client.verify_ipn(&ipn)?; // SignatureMismatch => discard
//! ```

pub mod checkout;
pub mod client;
pub mod config;
pub mod ipn;
pub mod sign;

// Re-exports
pub use checkout::Checkout;
pub use client::GatewayClient;
pub use config::{Environment, GatewayConfig};
pub use ipn::{IpnNotification, IpnStatus};
