use std::collections::HashMap;

use crate::domain::exchange::Exchange;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Per-exchange base URL overrides, keyed by exchange name.
    #[serde(default)]
    pub endpoints: HashMap<String, String>,
}

impl GatewayConfig {
    pub fn endpoint_for(&self, exchange: Exchange) -> &str {
        self.endpoints
            .get(exchange.name())
            .unwrap_or(&self.base_url)
    }
}
