use std::collections::HashMap;

use thiserror::Error;

use crate::domain::{
    balance::Balance,
    credential::InvalidCredentialFormat,
    exchange::Exchange,
    sort::SortKey,
};

/// Raw `key:secret` tokens per exchange, in the order they were given.
pub type CredentialsByExchange = HashMap<Exchange, Vec<String>>;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error(transparent)]
    InvalidCredentialFormat(#[from] InvalidCredentialFormat),

    #[error("Failed to connect to exchange: {exchange}, error: {cause}")]
    ExchangeConnection { exchange: String, cause: String },

    #[error("No client registered for exchange {0}")]
    UnregisteredExchange(Exchange),

    #[error("A balance fetch task did not complete")]
    TaskFailed,
}

#[derive(Debug, Clone, Default)]
pub struct PortfolioRequest {
    pub credentials: CredentialsByExchange,
    pub sort: Vec<SortKey>,
}

impl PortfolioRequest {
    pub fn new(credentials: CredentialsByExchange, sort: Vec<SortKey>) -> Self {
        Self { credentials, sort }
    }
}

#[async_trait::async_trait]
pub trait ApplicationService: Send + Sync {
    /// Fetches balances from every requested exchange and returns them sorted.
    /// Any failure aborts the whole request.
    async fn portfolio(
        &self,
        request: &PortfolioRequest,
    ) -> error_stack::Result<Vec<Balance>, FetchError>;
}
