//! # Gateway Client
//!
//! HTTP client for the G2A Pay API: quote creation for the hosted
//! checkout page, authorized merchant REST calls, and IPN verification.

use crate::checkout::{Checkout, QuoteResponse};
use crate::config::GatewayConfig;
use crate::ipn::IpnNotification;
use crate::sign;
use g2a_core::{GatewayError, GatewayResult};
use reqwest::{Client, Method};
use tracing::{debug, error, info, instrument};

/// Client for the G2A Pay gateway
///
/// Holds the merchant credentials and a reusable HTTP client. One client
/// serves any number of checkout sessions; the per-session state
/// (including the memoized redirect URL) lives on `Checkout`.
pub struct GatewayClient {
    config: GatewayConfig,
    client: Client,
}

impl GatewayClient {
    /// Create a new gateway client
    pub fn new(config: GatewayConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> GatewayResult<Self> {
        let config = GatewayConfig::from_env()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Get the hosted payment page URL for a checkout session.
    ///
    /// The first call submits the quote to the gateway and caches the
    /// resulting URL on the session; later calls return the cached value
    /// without touching the network.
    #[instrument(skip(self, checkout), fields(order_id = %checkout.order_id))]
    pub async fn redirect_url(&self, checkout: &mut Checkout) -> GatewayResult<String> {
        if let Some(url) = checkout.redirect_url() {
            return Ok(url.to_string());
        }

        let token = self.create_quote(checkout).await?;
        let url = format!(
            "{}/index/gateway?token={}",
            self.config.checkout_base_url, token
        );

        info!(
            "Created checkout quote: order_id={}, url={}",
            checkout.order_id, url
        );

        checkout.redirect_url = Some(url.clone());
        Ok(url)
    }

    /// Submit the quote request and extract the token
    async fn create_quote(&self, checkout: &Checkout) -> GatewayResult<String> {
        if checkout.cart.is_empty() {
            return Err(GatewayError::InvalidRequest(
                "Cart has no items".to_string(),
            ));
        }

        let form_params = self.quote_form(checkout);

        debug!(
            "Creating checkout quote: {} items, currency={}",
            checkout.cart.len(),
            checkout.currency
        );

        let url = format!("{}/index/createQuote", self.config.checkout_base_url);

        let response = self
            .client
            .post(&url)
            .form(&form_params)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Gateway quote error: status={}, body={}", status, body);
            return Err(GatewayError::InvalidQuoteResponse { body });
        }

        let quote: QuoteResponse = match serde_json::from_str(&body) {
            Ok(quote) => quote,
            Err(_) => {
                error!("Gateway quote body is not JSON: body={}", body);
                return Err(GatewayError::InvalidQuoteResponse { body });
            }
        };

        match quote.token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => {
                error!("Gateway quote missing token: body={}", body);
                Err(GatewayError::InvalidQuoteResponse { body })
            }
        }
    }

    /// Build the createQuote form body.
    ///
    /// Item keys use the bracketed array encoding the gateway expects
    /// (`items[0][name]`, ...). `email` is included only when set.
    fn quote_form(&self, checkout: &Checkout) -> Vec<(String, String)> {
        let total = checkout.total_price();

        let mut form_params: Vec<(String, String)> = vec![
            ("api_hash".to_string(), self.config.api_hash.clone()),
            ("order_id".to_string(), checkout.order_id.to_string()),
            (
                "hash".to_string(),
                sign::checkout_hash(
                    checkout.order_id,
                    total,
                    checkout.currency,
                    &self.config.secret_key,
                ),
            ),
            ("amount".to_string(), total.to_string()),
            (
                "currency".to_string(),
                checkout.currency.as_str().to_string(),
            ),
            ("url_ok".to_string(), checkout.url_ok.clone()),
            ("url_failure".to_string(), checkout.url_failure.clone()),
        ];

        for (i, item) in checkout.cart.items().iter().enumerate() {
            if let Some(ref sku) = item.sku {
                form_params.push((format!("items[{}][id]", i), sku.clone()));
                form_params.push((format!("items[{}][sku]", i), sku.clone()));
            }
            form_params.push((format!("items[{}][name]", i), item.name.clone()));
            form_params.push((format!("items[{}][price]", i), item.unit_price.to_string()));
            form_params.push((format!("items[{}][qty]", i), item.quantity.to_string()));
            form_params.push((format!("items[{}][amount]", i), item.amount.to_string()));
        }

        if let Some(ref email) = checkout.customer_email {
            form_params.push(("email".to_string(), email.clone()));
        }

        form_params
    }

    /// `Authorization` header value for merchant REST calls:
    /// `{api_hash}; {authorization_hash}`
    fn authorization_header(&self) -> String {
        format!(
            "{}; {}",
            self.config.api_hash,
            sign::authorization_hash(
                &self.config.api_hash,
                &self.config.merchant_email,
                &self.config.secret_key,
            )
        )
    }

    /// Issue an authorized request against the merchant REST API.
    ///
    /// `fields` are sent as a form-encoded body for non-GET methods and
    /// ignored otherwise. The response body is returned as parsed JSON;
    /// its shape is owned by the remote service.
    #[instrument(skip(self, fields))]
    pub async fn authorized_request(
        &self,
        method: Method,
        uri: &str,
        fields: &[(String, String)],
    ) -> GatewayResult<serde_json::Value> {
        let url = format!("{}{}", self.config.rest_base_url, uri);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header("Authorization", self.authorization_header());

        if method != Method::GET && !fields.is_empty() {
            request = request.form(fields);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Gateway REST error: status={}, body={}", status, body);
            return Err(GatewayError::Network(format!("HTTP {}: {}", status, body)));
        }

        serde_json::from_str(&body)
            .map_err(|e| GatewayError::Serialization(format!("Failed to parse response: {}", e)))
    }

    /// Get the full payment detail for a transaction id
    pub async fn transaction_details(
        &self,
        transaction_id: &str,
    ) -> GatewayResult<serde_json::Value> {
        self.authorized_request(
            Method::GET,
            &format!("/transactions/{}", transaction_id),
            &[],
        )
        .await
    }

    /// Verify an inbound payment notification against the configured
    /// secret. A mismatch means the notification must not be trusted.
    pub fn verify_ipn(&self, ipn: &IpnNotification) -> GatewayResult<()> {
        ipn.verify(&self.config.secret_key)
    }
}
