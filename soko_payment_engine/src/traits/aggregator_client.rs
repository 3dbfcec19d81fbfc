use momo_tools::{
    AggregatorApi,
    AggregatorApiError,
    CheckoutRequest,
    CheckoutResponse,
    DisbursementRequest,
    DisbursementResponse,
};
use spg_common::Secret;

/// The aggregator wire operations the engine drives.
#[allow(async_fn_in_trait)]
pub trait AggregatorClient {
    /// Submit an outbound disbursement.
    async fn disburse(
        &self,
        request: &DisbursementRequest,
        token: &Secret<String>,
    ) -> Result<DisbursementResponse, AggregatorApiError>;

    /// Push a USSD checkout prompt to the payer's handset.
    async fn mno_checkout(
        &self,
        request: &CheckoutRequest,
        token: &Secret<String>,
    ) -> Result<CheckoutResponse, AggregatorApiError>;
}

impl AggregatorClient for AggregatorApi {
    async fn disburse(
        &self,
        request: &DisbursementRequest,
        token: &Secret<String>,
    ) -> Result<DisbursementResponse, AggregatorApiError> {
        AggregatorApi::disburse(self, request, token).await
    }

    async fn mno_checkout(
        &self,
        request: &CheckoutRequest,
        token: &Secret<String>,
    ) -> Result<CheckoutResponse, AggregatorApiError> {
        AggregatorApi::mno_checkout(self, request, token).await
    }
}
