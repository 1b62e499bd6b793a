//! # Gateway Configuration
//!
//! Credentials and environment selection for the G2A Pay client.
//! All secrets are loaded from environment variables.

use g2a_core::{GatewayError, GatewayResult};
use std::env;

/// Hosted checkout base URL, production
pub const CHECKOUT_PRODUCTION_URL: &str = "https://checkout.pay.g2a.com";

/// Hosted checkout base URL, sandbox
pub const CHECKOUT_TEST_URL: &str = "https://checkout.test.pay.g2a.com";

/// Authorized REST API base URL, production
pub const REST_PRODUCTION_URL: &str = "https://pay.g2a.com/rest";

/// Authorized REST API base URL, sandbox
pub const REST_TEST_URL: &str = "https://www.test.pay.g2a.com/rest";

/// Gateway environment.
///
/// The four endpoint bases are fixed constants of the remote service;
/// the environment flag is the only runtime selector between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Test,
    Production,
}

impl Environment {
    /// Base URL for quote creation and the hosted payment page
    pub fn checkout_base_url(&self) -> &'static str {
        match self {
            Environment::Production => CHECKOUT_PRODUCTION_URL,
            Environment::Test => CHECKOUT_TEST_URL,
        }
    }

    /// Base URL for authorized merchant API calls
    pub fn rest_base_url(&self) -> &'static str {
        match self {
            Environment::Production => REST_PRODUCTION_URL,
            Environment::Test => REST_TEST_URL,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Test => write!(f, "test"),
        }
    }
}

/// G2A Pay merchant configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Merchant API hash
    pub api_hash: String,

    /// Merchant API secret, input to every signature
    pub secret_key: String,

    /// Merchant account email, input to the authorization hash
    pub merchant_email: String,

    /// Selected environment
    pub environment: Environment,

    /// Checkout base URL (for testing/mocking)
    pub checkout_base_url: String,

    /// Authorized REST base URL (for testing/mocking)
    pub rest_base_url: String,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `G2A_API_HASH`
    /// - `G2A_API_SECRET`
    /// - `G2A_MERCHANT_EMAIL`
    ///
    /// Optional:
    /// - `G2A_ENVIRONMENT` (`production` or `test`, default `test`)
    pub fn from_env() -> GatewayResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_hash = env::var("G2A_API_HASH")
            .map_err(|_| GatewayError::Configuration("G2A_API_HASH not set".to_string()))?;

        let secret_key = env::var("G2A_API_SECRET")
            .map_err(|_| GatewayError::Configuration("G2A_API_SECRET not set".to_string()))?;

        let merchant_email = env::var("G2A_MERCHANT_EMAIL").map_err(|_| {
            GatewayError::Configuration("G2A_MERCHANT_EMAIL not set".to_string())
        })?;

        let environment = match env::var("G2A_ENVIRONMENT").as_deref() {
            Ok("production") => Environment::Production,
            Ok("test") | Err(_) => Environment::Test,
            Ok(other) => {
                return Err(GatewayError::Configuration(format!(
                    "G2A_ENVIRONMENT must be 'production' or 'test', got '{}'",
                    other
                )))
            }
        };

        if api_hash.is_empty() || secret_key.is_empty() {
            return Err(GatewayError::Configuration(
                "G2A_API_HASH and G2A_API_SECRET must be non-empty".to_string(),
            ));
        }

        Ok(Self::new(api_hash, secret_key, merchant_email, environment))
    }

    /// Create config with explicit values (for testing)
    pub fn new(
        api_hash: impl Into<String>,
        secret_key: impl Into<String>,
        merchant_email: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Self {
            api_hash: api_hash.into(),
            secret_key: secret_key.into(),
            merchant_email: merchant_email.into(),
            environment,
            checkout_base_url: environment.checkout_base_url().to_string(),
            rest_base_url: environment.rest_base_url().to_string(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }

    /// Builder: set custom checkout base URL (for testing)
    pub fn with_checkout_base_url(mut self, url: impl Into<String>) -> Self {
        self.checkout_base_url = url.into();
        self
    }

    /// Builder: set custom REST base URL (for testing)
    pub fn with_rest_base_url(mut self, url: impl Into<String>) -> Self {
        self.rest_base_url = url.into();
        self
    }
}
