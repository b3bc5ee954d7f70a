use std::{collections::HashMap, sync::Arc, time::Duration};

use error_stack::report;
use strum::IntoEnumIterator;

use crate::{
    config::GatewayConfig,
    domain::exchange::Exchange,
    ports::{ClientFactory, ExchangeClient, ExchangeClientError},
};

use super::gateway_client::GatewayClient;

pub type ClientConstructor = Box<dyn Fn() -> Arc<dyn ExchangeClient> + Send + Sync>;

/// Name-to-constructor table of exchange clients.
#[derive(Default)]
pub struct ClientRegistry {
    constructors: HashMap<Exchange, ClientConstructor>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(mut self, exchange: Exchange, constructor: F) -> Self
    where
        F: Fn() -> Arc<dyn ExchangeClient> + Send + Sync + 'static,
    {
        self.constructors.insert(exchange, Box::new(constructor));
        self
    }

    /// Registers a shared client instance for `exchange`.
    pub fn register_client(self, exchange: Exchange, client: Arc<dyn ExchangeClient>) -> Self {
        self.register(exchange, move || Arc::clone(&client))
    }

    /// Registry with every supported exchange served by the balance gateway.
    pub fn gateway(config: &GatewayConfig) -> error_stack::Result<Self, ExchangeClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|error| report!(ExchangeClientError::HttpError(error.to_string())))?;

        let registry = Exchange::iter().fold(Self::new(), |registry, exchange| {
            let client = GatewayClient::new(http.clone(), exchange, config.endpoint_for(exchange));
            tracing::debug!("{}: using gateway {}", exchange, client.base_url());
            registry.register(exchange, move || -> Arc<dyn ExchangeClient> {
                Arc::new(client.clone())
            })
        });

        Ok(registry)
    }

    pub fn registered(&self) -> Vec<Exchange> {
        let mut exchanges: Vec<Exchange> = self.constructors.keys().copied().collect();
        exchanges.sort();
        exchanges
    }
}

impl ClientFactory for ClientRegistry {
    fn create(&self, exchange: Exchange) -> Option<Arc<dyn ExchangeClient>> {
        self.constructors.get(&exchange).map(|constructor| constructor())
    }
}

impl std::fmt::Debug for ClientRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientRegistry")
            .field("exchanges", &self.registered())
            .finish()
    }
}
