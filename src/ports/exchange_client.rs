use std::{collections::HashMap, sync::Arc};

use thiserror::Error;

use crate::domain::{exchange::Exchange, balance::ExchangeBalance};

use super::cancel_context::CancelContext;

/// Balances keyed by currency symbol.
pub type ExchangeBalances = HashMap<String, ExchangeBalance>;

#[derive(Error, Debug)]
pub enum ExchangeClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    #[error("HTTP status error: {0}")]
    HttpStatusError(String),

    #[error("JSON parsing failed")]
    JsonError,

    #[error("Failed to sign request")]
    SigningError,

    #[error("Request cancelled")]
    Cancelled,

    #[error("{0}")]
    /// Free-form failure reported by a client implementation that has no finer
    /// grained variant.
    Rejected(String),
}

/// Balance retrieval capability of one exchange. Implementations must give up once
/// `ctx` is cancelled.
#[async_trait::async_trait]
pub trait ExchangeClient: Send + Sync {
    async fn get_balances(
        &self,
        ctx: &CancelContext,
        key: &str,
        secret: &str,
    ) -> error_stack::Result<ExchangeBalances, ExchangeClientError>;
}

/// Maps an exchange to its client. `None` means no client was registered for it.
pub trait ClientFactory: Send + Sync {
    fn create(&self, exchange: Exchange) -> Option<Arc<dyn ExchangeClient>>;
}
