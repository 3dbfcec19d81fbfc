use momo_tools::AggregatorApiError;
use thiserror::Error;

use crate::traits::{SellerStoreError, TokenError};

/// Faults that can interrupt a payment or payout flow before it reaches an outcome.
///
/// These never cross the API boundary: the outermost flow methods fold them into the failure
/// envelope.
#[derive(Debug, Error)]
pub enum PaymentFlowError {
    #[error("{0}")]
    Seller(#[from] SellerStoreError),
    #[error("{0}")]
    Token(#[from] TokenError),
    #[error("{0}")]
    Aggregator(#[from] AggregatorApiError),
}
