use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A seller record as stored by the marketplace.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Seller {
    pub id: i64,
    pub display_name: String,
    /// The mobile-money account payouts are disbursed to, in any accepted phone format.
    pub payout_msisdn: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSeller {
    pub display_name: String,
    pub payout_msisdn: String,
}

/// The slice of a seller record the payout flow needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerPayoutAccount {
    pub seller_id: i64,
    pub msisdn: String,
    pub display_name: String,
}

impl From<Seller> for SellerPayoutAccount {
    fn from(seller: Seller) -> Self {
        Self { seller_id: seller.id, msisdn: seller.payout_msisdn, display_name: seller.display_name }
    }
}
