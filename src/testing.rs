//! Mock exchange clients shared by unit tests.

use std::sync::{Arc, Mutex};

use error_stack::report;

use crate::{
    domain::balance::ExchangeBalance,
    ports::{CancelContext, ExchangeBalances, ExchangeClient, ExchangeClientError},
};

#[derive(Debug, Default, Clone)]
pub(crate) struct CallLog(Arc<Mutex<Vec<(String, String)>>>);

impl CallLog {
    fn record(&self, key: &str, secret: &str) {
        self.0
            .lock()
            .unwrap()
            .push((key.to_string(), secret.to_string()));
    }

    pub(crate) fn calls(&self) -> Vec<(String, String)> {
        self.0.lock().unwrap().clone()
    }
}

pub(crate) fn balances(entries: &[(&str, &str, &str)]) -> ExchangeBalances {
    entries
        .iter()
        .map(|(symbol, amount, btc)| (symbol.to_string(), ExchangeBalance::new(*amount, *btc)))
        .collect()
}

/// Always answers with the same balances.
pub(crate) struct StaticClient {
    balances: ExchangeBalances,
    log: CallLog,
}

impl StaticClient {
    pub(crate) fn new(entries: &[(&str, &str, &str)], log: CallLog) -> Self {
        Self {
            balances: balances(entries),
            log,
        }
    }
}

#[async_trait::async_trait]
impl ExchangeClient for StaticClient {
    async fn get_balances(
        &self,
        _ctx: &CancelContext,
        key: &str,
        secret: &str,
    ) -> error_stack::Result<ExchangeBalances, ExchangeClientError> {
        self.log.record(key, secret);
        Ok(self.balances.clone())
    }
}

/// Fails every call, or only calls made with `failing_key` when one is set.
pub(crate) struct FailingClient {
    message: &'static str,
    failing_key: Option<&'static str>,
    log: CallLog,
}

impl FailingClient {
    pub(crate) fn new(message: &'static str) -> Self {
        Self {
            message,
            failing_key: None,
            log: CallLog::default(),
        }
    }

    pub(crate) fn for_key(message: &'static str, failing_key: &'static str, log: CallLog) -> Self {
        Self {
            message,
            failing_key: Some(failing_key),
            log,
        }
    }
}

#[async_trait::async_trait]
impl ExchangeClient for FailingClient {
    async fn get_balances(
        &self,
        _ctx: &CancelContext,
        key: &str,
        secret: &str,
    ) -> error_stack::Result<ExchangeBalances, ExchangeClientError> {
        self.log.record(key, secret);
        match self.failing_key {
            Some(failing_key) if failing_key != key => Ok(balances(&[("BTC", "1", "1")])),
            _ => Err(report!(ExchangeClientError::Rejected(self.message.to_string()))),
        }
    }
}

/// Never answers until the context is cancelled.
pub(crate) struct PendingClient;

#[async_trait::async_trait]
impl ExchangeClient for PendingClient {
    async fn get_balances(
        &self,
        ctx: &CancelContext,
        _key: &str,
        _secret: &str,
    ) -> error_stack::Result<ExchangeBalances, ExchangeClientError> {
        ctx.cancelled().await;
        Err(report!(ExchangeClientError::Cancelled))
    }
}
