//! # IPN Verification
//!
//! Inbound payment notifications. The gateway posts these server-to-server
//! after a payment event; the hash must be verified before the
//! notification is trusted for fulfillment.

use crate::sign;
use g2a_core::{Currency, GatewayError, GatewayResult};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Payment status carried by a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IpnStatus {
    Complete,
    Rejected,
    Canceled,
    Refunded,
    PartialRefunded,
    Pending,
}

/// An inbound payment notification, as posted by the gateway.
///
/// Ids are kept as the strings they arrive in and are hashed verbatim.
/// Only `transaction_id`, `order_id` and `amount` participate in
/// verification; the remaining fields are informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpnNotification {
    pub transaction_id: String,

    #[serde(rename = "userOrderId")]
    pub order_id: String,

    pub amount: f64,

    /// Hash supplied by the gateway, to be checked against a local
    /// recomputation
    pub hash: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<IpnStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refunded_amount: Option<f64>,
}

impl IpnNotification {
    /// Create a notification from its hash-relevant fields
    pub fn new(
        transaction_id: impl Into<String>,
        order_id: impl Into<String>,
        amount: f64,
        hash: impl Into<String>,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            order_id: order_id.into(),
            amount,
            hash: hash.into(),
            currency: None,
            status: None,
            refunded_amount: None,
        }
    }

    /// Recompute the hash over the received fields and compare it in
    /// constant time against the supplied one. On mismatch the
    /// notification must be discarded.
    pub fn verify(&self, secret_key: &str) -> GatewayResult<()> {
        let expected = sign::ipn_hash(
            &self.transaction_id,
            &self.order_id,
            self.amount,
            secret_key,
        );

        if sign::constant_time_compare(&expected, &self.hash) {
            Ok(())
        } else {
            warn!(
                "IPN signature mismatch: transaction_id={}, order_id={}",
                self.transaction_id, self.order_id
            );
            Err(GatewayError::SignatureMismatch)
        }
    }
}
