//! SQLite-backed seller store.
//!
//! Low-level queries live in [`sellers`] as free functions over a `&mut SqliteConnection`, so
//! callers can compose them inside a pool connection or a transaction as the need arises.
//! [`SqliteSellerStore`] is the thin stateful wrapper the rest of the system uses.
mod db;
mod sellers;
mod sqlite_impl;

pub use db::{db_url, new_pool};
pub use sqlite_impl::SqliteSellerStore;
