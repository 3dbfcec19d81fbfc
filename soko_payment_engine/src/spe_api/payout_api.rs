//! Outbound disbursements to seller mobile-money accounts.

use log::*;
use momo_tools::{AggregatorApiError, AggregatorConfig, DisbursementRequest, Payee, TransactionDetails};
use spg_common::Tzs;

use crate::{
    helpers::{new_payout_reference, normalize_msisdn},
    spe_api::{errors::PaymentFlowError, payment_objects::PaymentOutcome},
    traits::{AggregatorClient, SellerStore, TokenProvider},
};

/// Builds, signs and sends a single disbursement attempt for a seller.
///
/// One call is one attempt: no retries, no backoff, no deduplication beyond the unique
/// reference. The reference is generated here and rides on the request twice (top level and
/// `transaction.id`) so the provider's asynchronous callback can be correlated either way.
pub struct PayoutApi<S, A, T> {
    sellers: S,
    client: A,
    tokens: T,
    config: AggregatorConfig,
}

impl<S, A, T> PayoutApi<S, A, T>
where
    S: SellerStore,
    A: AggregatorClient,
    T: TokenProvider,
{
    pub fn new(sellers: S, client: A, tokens: T, config: AggregatorConfig) -> Self {
        Self { sellers, client, tokens, config }
    }

    /// Disburse `amount` to the seller's payout account and report the outcome.
    ///
    /// Never returns an error: faults anywhere in the flow are folded into the failure
    /// envelope, with the generated reference attached when one exists.
    pub async fn send_payout(&self, seller_id: i64, amount: Tzs) -> PaymentOutcome {
        if !amount.is_positive() {
            return PaymentOutcome::failure("Amount must be greater than zero.");
        }
        let mut reference = None;
        match self.try_send_payout(seller_id, amount, &mut reference).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Payout of {amount} to seller {seller_id} failed. {e}");
                let outcome = PaymentOutcome::exception(&e);
                match reference {
                    Some(reference) => outcome.with_reference(reference),
                    None => outcome,
                }
            },
        }
    }

    async fn try_send_payout(
        &self,
        seller_id: i64,
        amount: Tzs,
        reference_out: &mut Option<String>,
    ) -> Result<PaymentOutcome, PaymentFlowError> {
        let account = self.sellers.fetch_payout_account(seller_id).await?;
        let reference = new_payout_reference();
        *reference_out = Some(reference.clone());
        let token = self.tokens.access_token()?;
        let request = DisbursementRequest {
            payee: Payee {
                currency: self.config.currency.clone(),
                msisdn: normalize_msisdn(&account.msisdn),
                name: account.display_name.clone(),
            },
            reference: reference.clone(),
            pin: self.config.disbursement_pin.reveal().clone(),
            transaction: TransactionDetails::b2b(amount, reference.clone()),
        };
        debug!("Disbursing {amount} to seller {seller_id} ({}) under {reference}", account.display_name);
        match self.client.disburse(&request, &token).await {
            Ok(response) => {
                let transaction_id = response.transaction_id();
                Ok(PaymentOutcome {
                    status: response.status.success,
                    message: response.status.message,
                    reference: Some(reference),
                    transaction_id,
                })
            },
            // The provider answered, just not with a 2xx. That is a reportable outcome, not a
            // fault: the reference is already live on their side and must reach the caller.
            Err(AggregatorApiError::QueryError { status, message }) => {
                warn!("Disbursement {reference} rejected with HTTP {status}. {message}");
                Ok(PaymentOutcome {
                    status: false,
                    message: format!("Disbursement request failed with HTTP {status}"),
                    reference: Some(reference),
                    transaction_id: None,
                })
            },
            Err(e) => Err(e.into()),
        }
    }
}
