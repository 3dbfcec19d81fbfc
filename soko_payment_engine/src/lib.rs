//! SokoPay Payment Engine
//!
//! The payment engine is the orchestration core of the SokoPay marketplace gateway. It decides
//! how an inbound payment is initiated (by payment-method type and mobile-network operator) and
//! how an outbound disbursement to a seller's mobile-money account is built, sent and
//! interpreted. The engine never talks HTTP or SQL directly; it works against three seams:
//!
//! 1. [`traits::AggregatorClient`] — the mobile-money aggregator wire operations, implemented by
//!    [`momo_tools::AggregatorApi`].
//! 2. [`traits::SellerStore`] — seller payout-account lookups. A SQLite backend is provided in
//!    [`sqlite`] (enabled by default).
//! 3. [`traits::TokenProvider`] — the aggregator bearer token. The token lifecycle (refresh,
//!    expiry) is owned elsewhere; the engine only reads the current value, typically through
//!    [`token_cache::InMemoryTokenCache`].
//!
//! Every payment or payout attempt terminates in a [`PaymentOutcome`] envelope. Faults are
//! folded into the envelope at the outermost boundary; they never escape as errors or panics.
pub mod db_types;
pub mod helpers;
mod spe_api;
pub mod token_cache;
pub mod traits;

#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "sqlite")]
pub use sqlite::{db_url, new_pool, SqliteSellerStore};
pub use spe_api::{
    errors::PaymentFlowError,
    payment_api::PaymentApi,
    payment_objects::{ChargeRequest, MethodType, MnoDispatchTable, PaymentMethod, PaymentOutcome},
    payout_api::PayoutApi,
};
pub use traits::{AggregatorClient, SellerStore, SellerStoreError, TokenError, TokenProvider};
