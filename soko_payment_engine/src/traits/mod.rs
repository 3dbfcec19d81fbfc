//! Seams between the orchestration core and its collaborators.
//!
//! * [`SellerStore`] resolves seller payout accounts. The SQLite backend in [`crate::sqlite`]
//!   implements it; tests substitute mocks.
//! * [`TokenProvider`] yields the aggregator bearer token. Refreshing the token is someone
//!   else's job; the engine only reads it.
//! * [`AggregatorClient`] covers the aggregator wire operations so the payment and payout APIs
//!   can be exercised without HTTP.
mod aggregator_client;
mod seller_store;
mod token_provider;

pub use aggregator_client::AggregatorClient;
pub use seller_store::{SellerStore, SellerStoreError};
pub use token_provider::{TokenError, TokenProvider};
