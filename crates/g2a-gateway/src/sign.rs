//! # Request Signing
//!
//! The three SHA-256 signatures of the G2A Pay protocol. Field order and
//! numeric formatting are a compatibility contract with the remote service
//! and must match it byte-for-byte:
//!
//! 1. Checkout: `sha256(order_id + amount + currency + secret)`
//! 2. Authorization: `sha256(api_hash + merchant_email + secret)`
//! 3. IPN: `sha256(transaction_id + order_id + amount + secret)`
//!
//! Amounts are normalized before hashing: rounded half-away-from-zero to
//! two decimal places, then rendered in minimal form with no trailing
//! zeros (`10` -> "10", `10.5` -> "10.5", `10.567` -> "10.57").

use g2a_core::Currency;
use sha2::{Digest, Sha256};

/// Signature proving a checkout quote was built by the secret holder
pub fn checkout_hash(
    order_id: u64,
    total_price: f64,
    currency: Currency,
    secret_key: &str,
) -> String {
    sha256_hex(&format!(
        "{}{}{}{}",
        order_id,
        normalize_amount(total_price),
        currency.as_str(),
        secret_key
    ))
}

/// Static credential proof attached to every authorized API request
pub fn authorization_hash(api_hash: &str, merchant_email: &str, secret_key: &str) -> String {
    sha256_hex(&format!("{}{}{}", api_hash, merchant_email, secret_key))
}

/// Signature over an inbound payment notification.
///
/// Transaction and order ids are hashed verbatim as the strings they
/// arrive as; only the amount goes through normalization.
pub fn ipn_hash(transaction_id: &str, order_id: &str, amount: f64, secret_key: &str) -> String {
    sha256_hex(&format!(
        "{}{}{}{}",
        transaction_id,
        order_id,
        normalize_amount(amount),
        secret_key
    ))
}

/// Render an amount the way the gateway hashes it: two-decimal rounding
/// (half away from zero), then the minimal decimal string.
pub fn normalize_amount(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    format!("{}", rounded)
}

/// Compare two hex digests without short-circuiting on the first
/// differing byte
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0, |acc, (x, y)| acc | (x ^ y))
        == 0
}

fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
