//! # Currency Codes
//!
//! ISO 4217 currency codes accepted by the G2A Pay gateway.
//! The wire format (and the checkout hash) uses the uppercase code.

use serde::{Deserialize, Serialize};

/// Currencies the gateway quotes in (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    AUD,
    CAD,
    CHF,
    CZK,
    DKK,
    EUR,
    GBP,
    NOK,
    PLN,
    SEK,
    TRY,
    USD,
}

impl Currency {
    /// Returns the ISO 4217 currency code as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
            Currency::CHF => "CHF",
            Currency::CZK => "CZK",
            Currency::DKK => "DKK",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::NOK => "NOK",
            Currency::PLN => "PLN",
            Currency::SEK => "SEK",
            Currency::TRY => "TRY",
            Currency::USD => "USD",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::EUR
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
