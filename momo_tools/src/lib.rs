mod api;
mod config;
mod error;
mod helpers;

mod data_objects;

pub use api::AggregatorApi;
pub use config::AggregatorConfig;
pub use data_objects::{
    CheckoutRequest,
    CheckoutResponse,
    DisbursementCallback,
    DisbursementRequest,
    DisbursementResponse,
    Payee,
    ResponseData,
    ResponseStatus,
    TransactionDetails,
    TransactionRef,
};
pub use error::AggregatorApiError;
pub use helpers::parse_provider_amount;
