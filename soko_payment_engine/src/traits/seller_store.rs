use thiserror::Error;

use crate::db_types::SellerPayoutAccount;

/// Seller-record lookups the payout flow depends on.
#[allow(async_fn_in_trait)]
pub trait SellerStore {
    /// Resolve the payout account (mobile-money number and display name) for a seller.
    ///
    /// Inactive sellers are reported as [`SellerStoreError::SellerInactive`] rather than
    /// returned, so a payout can never target a suspended account.
    async fn fetch_payout_account(&self, seller_id: i64) -> Result<SellerPayoutAccount, SellerStoreError>;
}

#[derive(Debug, Clone, Error)]
pub enum SellerStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Seller {0} does not exist")]
    SellerNotFound(i64),
    #[error("Seller {0} is not active")]
    SellerInactive(i64),
}

impl From<sqlx::Error> for SellerStoreError {
    fn from(e: sqlx::Error) -> Self {
        SellerStoreError::DatabaseError(e.to_string())
    }
}
