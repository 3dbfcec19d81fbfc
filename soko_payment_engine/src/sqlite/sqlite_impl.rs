use std::fmt::Debug;

use sqlx::SqlitePool;

use super::{db, sellers};
use crate::{
    db_types::{NewSeller, SellerPayoutAccount},
    traits::{SellerStore, SellerStoreError},
};

#[derive(Clone)]
pub struct SqliteSellerStore {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteSellerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteSellerStore ({:?})", self.pool)
    }
}

impl SqliteSellerStore {
    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, SellerStoreError> {
        let pool = db::new_pool(url, max_connections).await?;
        Ok(Self { url: url.to_string(), pool })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub async fn insert_seller(&self, seller: &NewSeller) -> Result<i64, SellerStoreError> {
        let mut conn = self.pool.acquire().await?;
        sellers::insert_seller(seller, &mut conn).await
    }

    pub async fn set_seller_active(&self, seller_id: i64, active: bool) -> Result<(), SellerStoreError> {
        let mut conn = self.pool.acquire().await?;
        sellers::set_seller_active(seller_id, active, &mut conn).await
    }
}

impl SellerStore for SqliteSellerStore {
    async fn fetch_payout_account(&self, seller_id: i64) -> Result<SellerPayoutAccount, SellerStoreError> {
        let mut conn = self.pool.acquire().await?;
        let seller = sellers::seller_by_id(seller_id, &mut conn)
            .await?
            .ok_or(SellerStoreError::SellerNotFound(seller_id))?;
        if !seller.active {
            return Err(SellerStoreError::SellerInactive(seller_id));
        }
        Ok(seller.into())
    }
}
