use spg_common::Secret;
use thiserror::Error;

/// Access to the aggregator bearer token.
///
/// The token lifecycle (initial grant, refresh on expiry) belongs to an external collaborator.
/// Consumers fail fast when no token is available instead of sending an unauthenticated
/// request the provider would reject anyway.
pub trait TokenProvider {
    fn access_token(&self) -> Result<Secret<String>, TokenError>;
}

#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("no access token cached under '{0}'")]
    NotCached(String),
}
