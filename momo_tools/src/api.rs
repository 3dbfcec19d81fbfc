use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
};
use serde::{de::DeserializeOwned, Serialize};
use spg_common::Secret;

use crate::{
    config::AggregatorConfig,
    data_objects::{CheckoutRequest, CheckoutResponse, DisbursementRequest, DisbursementResponse},
    AggregatorApiError,
};

pub const DISBURSEMENT_PATH: &str = "/standard/v2/disbursements/";
pub const MNO_CHECKOUT_PATH: &str = "/azampay/mno/checkout";

/// Thin HTTP client for the mobile-money aggregator.
///
/// The client only knows how to build and send requests; the bearer token is supplied per call
/// by whatever owns the token lifecycle.
#[derive(Clone)]
pub struct AggregatorApi {
    config: AggregatorConfig,
    client: Arc<Client>,
}

impl AggregatorApi {
    pub fn new(config: AggregatorConfig) -> Result<Self, AggregatorApiError> {
        let mut headers = HeaderMap::with_capacity(4);
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        headers.insert("Accept", HeaderValue::from_static("*/*"));
        let country = HeaderValue::from_str(config.country.as_str())
            .map_err(|e| AggregatorApiError::Initialization(e.to_string()))?;
        headers.insert("X-Country", country);
        let currency = HeaderValue::from_str(config.currency.as_str())
            .map_err(|e| AggregatorApiError::Initialization(e.to_string()))?;
        headers.insert("X-Currency", currency);
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AggregatorApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// POSTs `body` to `path` and deserializes a 2xx response into `T`. Non-2xx statuses are
    /// reported as [`AggregatorApiError::QueryError`] with the body text as the message.
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        token: &Secret<String>,
    ) -> Result<T, AggregatorApiError> {
        let url = self.url(path);
        trace!("Sending aggregator request: {url}");
        let response = self
            .client
            .post(url)
            .bearer_auth(token.reveal())
            .json(body)
            .send()
            .await
            .map_err(|e| AggregatorApiError::ResponseError(e.to_string()))?;
        if response.status().is_success() {
            trace!("Aggregator request successful. {}", response.status());
            response.json::<T>().await.map_err(|e| AggregatorApiError::JsonError(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| AggregatorApiError::ResponseError(e.to_string()))?;
            Err(AggregatorApiError::QueryError { status, message })
        }
    }

    /// Submits an outbound disbursement. A `Ok` return only means the provider answered with a
    /// 2xx; the nested `status.success` flag decides whether the disbursement was accepted.
    pub async fn disburse(
        &self,
        request: &DisbursementRequest,
        token: &Secret<String>,
    ) -> Result<DisbursementResponse, AggregatorApiError> {
        debug!("Submitting disbursement {}", request.reference);
        let response = self.post_json::<DisbursementResponse, _>(DISBURSEMENT_PATH, request, token).await?;
        info!(
            "Disbursement {} answered: success={} ({})",
            request.reference, response.status.success, response.status.message
        );
        Ok(response)
    }

    /// Pushes a USSD checkout prompt to the payer's handset.
    pub async fn mno_checkout(
        &self,
        request: &CheckoutRequest,
        token: &Secret<String>,
    ) -> Result<CheckoutResponse, AggregatorApiError> {
        debug!("Initiating {} checkout for order {}", request.provider, request.external_id);
        let response = self.post_json::<CheckoutResponse, _>(MNO_CHECKOUT_PATH, request, token).await?;
        info!("Checkout for order {} answered: success={}", request.external_id, response.success);
        Ok(response)
    }
}
