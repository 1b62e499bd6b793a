//! # Checkout Session
//!
//! Working state for one hosted-checkout flow: order id, return URLs,
//! currency, optional customer email, and the cart. Setters may be called
//! in any order; nothing is validated until the quote is submitted.
//!
//! The redirect URL obtained from the gateway is memoized here; once set
//! it is read back without another network call.

use chrono::{DateTime, Utc};
use g2a_core::{Cart, Currency, LineItem};
use serde::{Deserialize, Serialize};

/// A checkout session to be quoted by the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkout {
    /// Merchant-side order id
    pub order_id: u64,

    /// Quote currency
    pub currency: Currency,

    /// URL the customer returns to after successful payment
    pub url_ok: String,

    /// URL the customer returns to after failure or cancellation
    pub url_failure: String,

    /// Customer email (optional, for prefill)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,

    /// Items and discounts
    pub cart: Cart,

    /// Hosted payment page URL, set at most once per session
    #[serde(skip)]
    pub(crate) redirect_url: Option<String>,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Checkout {
    /// Create a new checkout session for an order id
    pub fn new(order_id: u64) -> Self {
        Self {
            order_id,
            currency: Currency::default(),
            url_ok: String::new(),
            url_failure: String::new(),
            customer_email: None,
            cart: Cart::new(),
            redirect_url: None,
            created_at: Utc::now(),
        }
    }

    /// Builder: set the success return URL
    pub fn with_success_url(mut self, url: impl Into<String>) -> Self {
        self.url_ok = url.into();
        self
    }

    /// Builder: set the failure return URL
    pub fn with_failure_url(mut self, url: impl Into<String>) -> Self {
        self.url_failure = url.into();
        self
    }

    /// Builder: set the quote currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Builder: set the customer email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.customer_email = Some(email.into());
        self
    }

    /// Builder: replace the cart wholesale
    pub fn with_cart(mut self, cart: Cart) -> Self {
        self.cart = cart;
        self
    }

    /// Builder: add a line item
    pub fn with_item(mut self, item: LineItem) -> Self {
        self.cart.add_item(item);
        self
    }

    /// Builder: add a percentage discount, priced against the cart total
    /// accumulated so far
    pub fn with_percent_discount(mut self, item: LineItem, percent: f64) -> Self {
        self.cart.add_percent_discount(item, percent);
        self
    }

    /// Builder: add a fixed discount
    pub fn with_fixed_discount(mut self, item: LineItem, amount: f64) -> Self {
        self.cart.add_fixed_discount(item, amount);
        self
    }

    /// Running cart total
    pub fn total_price(&self) -> f64 {
        self.cart.total_price()
    }

    /// The memoized hosted payment page URL, if already obtained
    pub fn redirect_url(&self) -> Option<&str> {
        self.redirect_url.as_deref()
    }
}

/// Body of a successful createQuote response
#[derive(Debug, Deserialize)]
pub(crate) struct QuoteResponse {
    #[serde(default)]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let checkout = Checkout::new(1001);

        assert_eq!(checkout.order_id, 1001);
        assert_eq!(checkout.currency, Currency::EUR);
        assert!(checkout.customer_email.is_none());
        assert!(checkout.cart.is_empty());
        assert!(checkout.redirect_url().is_none());
    }

    #[test]
    fn test_builder_chain() {
        let checkout = Checkout::new(7)
            .with_success_url("https://shop.example/ok")
            .with_failure_url("https://shop.example/fail")
            .with_currency(Currency::PLN)
            .with_email("buyer@example.com")
            .with_item(LineItem::new("Gift card", 19.99, 2));

        assert_eq!(checkout.url_ok, "https://shop.example/ok");
        assert_eq!(checkout.currency, Currency::PLN);
        assert_eq!(checkout.customer_email.as_deref(), Some("buyer@example.com"));
        assert_eq!(checkout.total_price(), 39.98);
    }

    #[test]
    fn test_discounts_price_in_build_order() {
        let checkout = Checkout::new(7)
            .with_item(LineItem::new("A", 100.0, 1))
            .with_percent_discount(LineItem::new("promo", 0.0, 1), 10.0)
            .with_item(LineItem::new("B", 50.0, 1));

        // The discount saw only item A
        assert_eq!(checkout.cart.items()[1].amount, -10.0);
        assert_eq!(checkout.total_price(), 140.0);
    }

    #[test]
    fn test_quote_response_token_shapes() {
        let ok: QuoteResponse = serde_json::from_str("{\"token\":\"abc123\"}").unwrap();
        assert_eq!(ok.token.as_deref(), Some("abc123"));

        let null: QuoteResponse = serde_json::from_str("{\"token\":null}").unwrap();
        assert!(null.token.is_none());

        let missing: QuoteResponse = serde_json::from_str("{}").unwrap();
        assert!(missing.token.is_none());
    }
}
