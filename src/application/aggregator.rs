use std::sync::Arc;

use error_stack::{report, Report};
use strum::IntoEnumIterator;
use tokio::{sync::Mutex, task::JoinSet};
use tracing::{instrument, Instrument};

use crate::{
    domain::{balance::Balance, exchange::Exchange},
    ports::{CancelContext, ClientFactory, CredentialsByExchange, FetchError},
};

use super::balance_fetcher::fetch_exchange_balances;

/// Fetches every exchange concurrently, one task per exchange.
///
/// The first task to fail cancels `ctx`, the remaining tasks are aborted and its
/// error is returned; balances gathered so far are dropped. On success the balances
/// of all exchanges are returned unsorted.
#[instrument(skip_all)]
pub async fn aggregate(
    ctx: &CancelContext,
    factory: Arc<dyn ClientFactory>,
    credentials: &CredentialsByExchange,
) -> error_stack::Result<Vec<Balance>, FetchError> {
    let collected = Arc::new(Mutex::new(Vec::new()));
    let mut tasks = JoinSet::new();

    let exchanges: Vec<Exchange> = Exchange::iter().collect();
    for (index, exchange) in exchanges.iter().copied().enumerate() {
        let inputs = credentials.get(&exchange).cloned().unwrap_or_default();
        let ctx = ctx.clone();
        let factory = Arc::clone(&factory);
        let collected = Arc::clone(&collected);

        let span = tracing::span!(
            tracing::Level::INFO,
            "exchange",
            exchange = exchange.name(),
            index = index,
            len = exchanges.len()
        );

        tasks.spawn(
            async move {
                let balances = fetch_exchange_balances(&ctx, factory.as_ref(), exchange, &inputs)
                    .await
                    .into_result()?;
                collected.lock().await.extend(balances);
                Ok::<_, Report<FetchError>>(())
            }
            .instrument(span),
        );
    }

    while let Some(joined) = tasks.join_next().await {
        let result = joined
            .map_err(|join_error| {
                report!(FetchError::TaskFailed).attach_printable(join_error.to_string())
            })
            .and_then(|result| result);

        if let Err(error) = result {
            tracing::debug!("Cancelling remaining fetches: {}", error.current_context());
            ctx.cancel();
            tasks.abort_all();
            return Err(error);
        }
    }

    let balances = std::mem::take(&mut *collected.lock().await);
    tracing::info!("✅ Aggregated {} balances", balances.len());
    Ok(balances)
}
