use mockall::mock;
use momo_tools::{
    AggregatorApiError,
    CheckoutRequest,
    CheckoutResponse,
    DisbursementRequest,
    DisbursementResponse,
};
use soko_payment_engine::{
    db_types::SellerPayoutAccount,
    traits::{AggregatorClient, SellerStore, SellerStoreError},
};
use spg_common::Secret;

mock! {
    pub Aggregator {}
    impl AggregatorClient for Aggregator {
        async fn disburse(&self, request: &DisbursementRequest, token: &Secret<String>) -> Result<DisbursementResponse, AggregatorApiError>;
        async fn mno_checkout(&self, request: &CheckoutRequest, token: &Secret<String>) -> Result<CheckoutResponse, AggregatorApiError>;
    }
}

mock! {
    pub Sellers {}
    impl SellerStore for Sellers {
        async fn fetch_payout_account(&self, seller_id: i64) -> Result<SellerPayoutAccount, SellerStoreError>;
    }
}
