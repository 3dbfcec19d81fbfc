use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregatorApiError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("Invalid disbursement request: {0}")]
    RequestError(String),
    #[error("Invalid aggregator response: {0}")]
    ResponseError(String),
    #[error("Could not deserialize JSON: {0}")]
    JsonError(String),
    #[error("Query failed. Error {status}. {message}")]
    QueryError { status: u16, message: String },
    #[error("Invalid currency amount: {0}")]
    InvalidCurrencyAmount(String),
}
