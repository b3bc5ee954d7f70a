use error_stack::{report, Report};
use tracing::instrument;

use crate::{
    domain::{balance::Balance, credential::Credential, exchange::Exchange},
    ports::{CancelContext, ClientFactory, FetchError},
};

/// Result of fetching one exchange. On failure `balances` still holds what was
/// fetched for the credentials processed before the failing one.
#[derive(Debug)]
pub struct FetchOutcome {
    pub balances: Vec<Balance>,
    pub error: Option<Report<FetchError>>,
}

impl FetchOutcome {
    fn succeeded(balances: Vec<Balance>) -> Self {
        Self {
            balances,
            error: None,
        }
    }

    fn failed(balances: Vec<Balance>, error: Report<FetchError>) -> Self {
        Self {
            balances,
            error: Some(error),
        }
    }

    pub fn into_result(self) -> error_stack::Result<Vec<Balance>, FetchError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.balances),
        }
    }
}

/// Label shown in the Exchange column. Accounts are numbered from 1 in input order
/// as soon as more than one credential string was given.
pub fn exchange_label(exchange: Exchange, index: usize, credential_count: usize) -> String {
    if credential_count > 1 {
        format!("{} #{}", exchange, index + 1)
    } else {
        exchange.to_string()
    }
}

/// Fetches the balances of every account given for `exchange`. Empty credential
/// strings are skipped; the first failure stops the remaining accounts.
#[instrument(
    name = "fetch_exchange_balances",
    skip(ctx, factory, credential_inputs),
    fields(exchange = %exchange, accounts = credential_inputs.len())
)]
pub async fn fetch_exchange_balances(
    ctx: &CancelContext,
    factory: &dyn ClientFactory,
    exchange: Exchange,
    credential_inputs: &[String],
) -> FetchOutcome {
    let mut balances = Vec::new();

    for (index, raw) in credential_inputs.iter().enumerate() {
        if raw.is_empty() {
            continue;
        }

        let label = exchange_label(exchange, index, credential_inputs.len());

        let credential = match Credential::parse(raw) {
            Ok(credential) => credential,
            Err(error) => {
                tracing::debug!("{}: ❌ Invalid credential", label);
                return FetchOutcome::failed(balances, Report::new(FetchError::from(error)));
            }
        };

        let Some(client) = factory.create(exchange) else {
            return FetchOutcome::failed(
                balances,
                report!(FetchError::UnregisteredExchange(exchange)),
            );
        };

        tracing::trace!("{}: ☁️  Getting balances from exchange", label);
        let fetched = match client
            .get_balances(ctx, credential.key(), credential.secret())
            .await
        {
            Ok(fetched) => fetched,
            Err(report) => {
                let cause = report.current_context().to_string();
                tracing::debug!("{}: ❌ Error fetching balances: {}", label, cause);
                let error = report.change_context(FetchError::ExchangeConnection {
                    exchange: label,
                    cause,
                });
                return FetchOutcome::failed(balances, error);
            }
        };

        let mut fetched: Vec<_> = fetched.into_iter().collect();
        fetched.sort_by(|(a, _), (b, _)| a.cmp(b));

        tracing::debug!("{}: 📊 {} balances", label, fetched.len());
        balances.extend(
            fetched
                .into_iter()
                .map(|(symbol, raw)| Balance::new(symbol, label.clone(), raw)),
        );
    }

    FetchOutcome::succeeded(balances)
}
