//! Payment initiation dispatch.

use log::*;
use momo_tools::CheckoutRequest;

use crate::{
    helpers::{normalize_msisdn, MobileNetwork},
    spe_api::{
        errors::PaymentFlowError,
        payment_objects::{ChargeRequest, MethodType, MnoDispatchTable, PaymentMethod, PaymentOutcome},
    },
    traits::{AggregatorClient, TokenProvider},
};

/// Routes an initiate-payment request to the channel that can serve it.
///
/// Dispatch is flat: one match on the method type, then one lookup of the operator code. Tigo
/// is the only operator wired to a live charge; every other resolved channel answers with a
/// "not configured" envelope. All failures, including runtime faults in the charge path, are
/// reported through [`PaymentOutcome`] — this API never returns an error.
pub struct PaymentApi<A, T> {
    client: A,
    tokens: T,
    table: MnoDispatchTable,
    currency: String,
}

impl<A, T> PaymentApi<A, T>
where
    A: AggregatorClient,
    T: TokenProvider,
{
    pub fn new<S: Into<String>>(client: A, tokens: T, table: MnoDispatchTable, currency: S) -> Self {
        Self { client, tokens, table, currency: currency.into() }
    }

    pub async fn initiate_payment(&self, method: &PaymentMethod, request: &ChargeRequest) -> PaymentOutcome {
        trace!("Initiating {:?} payment for order {}", method.method_type, request.order_id);
        if !method.active {
            return PaymentOutcome::failure(format!("{} payments are not configured yet.", method.display_name));
        }
        match method.method_type {
            MethodType::Mno => self.initiate_mno_payment(method, request).await,
            MethodType::Card => PaymentOutcome::failure("Card payments are not configured yet."),
            MethodType::Bank => PaymentOutcome::failure("Bank payments are not configured yet."),
            MethodType::Unknown => PaymentOutcome::failure("Unknown payment type."),
        }
    }

    async fn initiate_mno_payment(&self, method: &PaymentMethod, request: &ChargeRequest) -> PaymentOutcome {
        if request.phone.trim().is_empty() {
            return PaymentOutcome::failure("Phone number is required.");
        }
        if !request.amount.is_positive() {
            return PaymentOutcome::failure("Amount must be greater than zero.");
        }
        let network = match self.table.resolve(&method.provider_code) {
            Some(network) => network,
            None => {
                debug!("No network configured for method code {}", method.provider_code);
                return PaymentOutcome::failure("Mobile network not recognized.");
            },
        };
        let msisdn = normalize_msisdn(&request.phone);
        if MobileNetwork::from_msisdn(&msisdn).is_none() {
            debug!("Payer number {msisdn} does not match any operator prefix");
            return PaymentOutcome::failure("Mobile network not recognized.");
        }
        match network {
            MobileNetwork::Tigo => {
                self.charge_tigo(msisdn, request).await.unwrap_or_else(|e| {
                    warn!("Tigo charge for order {} failed. {e}", request.order_id);
                    PaymentOutcome::exception(&e)
                })
            },
            other => PaymentOutcome::failure(format!("{other} payments are not configured yet.")),
        }
    }

    async fn charge_tigo(&self, msisdn: String, request: &ChargeRequest) -> Result<PaymentOutcome, PaymentFlowError> {
        let token = self.tokens.access_token()?;
        let checkout = CheckoutRequest {
            account_number: msisdn,
            amount: request.amount,
            currency: self.currency.clone(),
            external_id: request.order_id.clone(),
            provider: MobileNetwork::Tigo.provider_name().to_string(),
        };
        let response = self.client.mno_checkout(&checkout, &token).await?;
        info!("Checkout for order {} answered: success={}", request.order_id, response.success);
        Ok(PaymentOutcome {
            status: response.success,
            message: response.message,
            reference: None,
            transaction_id: response.transaction_id,
        })
    }
}
