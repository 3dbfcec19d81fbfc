use log::trace;
use sqlx::{Error as SqlxError, SqliteConnection, SqlitePool};

use crate::{
    db_types::{NewSeller, Seller},
    traits::SellerStoreError,
};

pub async fn create_sellers_table(pool: &SqlitePool) -> Result<(), SqlxError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sellers (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            display_name  TEXT NOT NULL,
            payout_msisdn TEXT NOT NULL,
            active        BOOLEAN NOT NULL DEFAULT 1,
            created_at    TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )"#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn seller_by_id(seller_id: i64, conn: &mut SqliteConnection) -> Result<Option<Seller>, SellerStoreError> {
    trace!("Fetching seller [{seller_id}]");
    let result = sqlx::query_as::<_, Seller>(
        r#"
        SELECT id, display_name, payout_msisdn, active, created_at
        FROM sellers
        WHERE id = $1"#,
    )
    .bind(seller_id)
    .fetch_one(conn)
    .await;
    match result {
        Err(SqlxError::RowNotFound) => Ok(None),
        Err(e) => Err(e.into()),
        Ok(seller) => Ok(Some(seller)),
    }
}

pub async fn insert_seller(seller: &NewSeller, conn: &mut SqliteConnection) -> Result<i64, SellerStoreError> {
    let result = sqlx::query("INSERT INTO sellers (display_name, payout_msisdn) VALUES ($1, $2)")
        .bind(&seller.display_name)
        .bind(&seller.payout_msisdn)
        .execute(conn)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn set_seller_active(seller_id: i64, active: bool, conn: &mut SqliteConnection) -> Result<(), SellerStoreError> {
    sqlx::query("UPDATE sellers SET active = $1 WHERE id = $2").bind(active).bind(seller_id).execute(conn).await?;
    Ok(())
}
