use std::sync::Arc;

use tracing::instrument;

use crate::{
    domain::{balance::Balance, sort::sort_balances},
    ports::{ApplicationService, CancelContext, ClientFactory, FetchError, PortfolioRequest},
};

use super::aggregator::aggregate;

pub struct CoinfolioApplicationService {
    factory: Arc<dyn ClientFactory>,
}

impl CoinfolioApplicationService {
    pub fn new(factory: Arc<dyn ClientFactory>) -> Self {
        Self { factory }
    }
}

impl std::fmt::Debug for CoinfolioApplicationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinfolioApplicationService")
            .field("factory", &"<ClientFactory>")
            .finish()
    }
}

#[async_trait::async_trait]
impl ApplicationService for CoinfolioApplicationService {
    #[instrument(skip_all, fields(sort = ?request.sort))]
    async fn portfolio(
        &self,
        request: &PortfolioRequest,
    ) -> error_stack::Result<Vec<Balance>, FetchError> {
        let ctx = CancelContext::new();
        let balances = aggregate(&ctx, Arc::clone(&self.factory), &request.credentials).await?;

        tracing::trace!("📊 Sorting {} balances", balances.len());
        Ok(sort_balances(balances, &request.sort))
    }
}
