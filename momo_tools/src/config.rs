use log::*;
use spg_common::Secret;

pub const DEFAULT_TOKEN_CACHE_KEY: &str = "aggregator_access_token";

#[derive(Debug, Clone, Default)]
pub struct AggregatorConfig {
    /// Base URL of the aggregator's API, including scheme. e.g. "https://api.example.co.tz"
    pub base_url: String,
    /// ISO country code sent in the `X-Country` header.
    pub country: String,
    /// ISO currency code sent in the `X-Currency` header and used for payee amounts.
    pub currency: String,
    /// The disbursement PIN that authorizes outbound payouts.
    pub disbursement_pin: Secret<String>,
    /// The cache entry under which the externally refreshed access token is stored.
    pub token_cache_key: String,
}

impl AggregatorConfig {
    pub fn new_from_env_or_default() -> Self {
        let base_url = std::env::var("SPG_AGGREGATOR_BASE_URL").unwrap_or_else(|_| {
            warn!("SPG_AGGREGATOR_BASE_URL not set, using (probably useless) sandbox default");
            "https://sandbox.azampay.co.tz".to_string()
        });
        let country = std::env::var("SPG_AGGREGATOR_COUNTRY").unwrap_or_else(|_| {
            warn!("SPG_AGGREGATOR_COUNTRY not set, using TZ as default");
            "TZ".to_string()
        });
        let currency = std::env::var("SPG_AGGREGATOR_CURRENCY").unwrap_or_else(|_| {
            warn!("SPG_AGGREGATOR_CURRENCY not set, using TZS as default");
            "TZS".to_string()
        });
        let disbursement_pin = Secret::new(std::env::var("SPG_DISBURSEMENT_PIN").unwrap_or_else(|_| {
            warn!("SPG_DISBURSEMENT_PIN not set, disbursements will be rejected by the provider");
            "0000".to_string()
        }));
        let token_cache_key = std::env::var("SPG_TOKEN_CACHE_KEY").unwrap_or_else(|_| {
            debug!("SPG_TOKEN_CACHE_KEY not set, using {DEFAULT_TOKEN_CACHE_KEY}");
            DEFAULT_TOKEN_CACHE_KEY.to_string()
        });
        Self { base_url, country, currency, disbursement_pin, token_cache_key }
    }
}
