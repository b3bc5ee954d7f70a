use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File};
use error_stack::ResultExt;
use thiserror::Error;

use super::gateway_config::GatewayConfig;

pub const CONFIG_PATH_VAR: &str = "COINFOLIO_CONFIG";
pub const DEFAULT_CONFIG_NAME: &str = "Coinfolio";
pub const ENV_PREFIX: &str = "COINFOLIO";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("[CONFIG ERROR] Error reading configuration")]
    ReadError,
    #[error("[CONFIG ERROR] Failed to deserialize configuration")]
    DeserializeError,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct AppConfig {
    /// Maximum level of log events written to stderr.
    pub log_level: String,
    /// Decimal places of the BTC total.
    pub btc_precision: u32,
    pub gateway: GatewayConfig,
}

impl AppConfig {
    /// Loads defaults, then the optional config file (`COINFOLIO_CONFIG`, or
    /// `Coinfolio.{toml,yaml,json}` in the working directory), then `COINFOLIO_*`
    /// environment variables. Nested keys use `__`, e.g. `COINFOLIO_GATEWAY__BASE_URL`.
    pub fn load() -> error_stack::Result<Self, ConfigError> {
        let config_path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_NAME.to_string());

        let builder = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );

        Self::from_builder(builder).attach_printable_lazy(|| format!("Config file: {config_path}"))
    }

    pub fn from_builder(
        builder: ConfigBuilder<DefaultState>,
    ) -> error_stack::Result<Self, ConfigError> {
        builder
            .set_default("log_level", "warn")
            .and_then(|builder| builder.set_default("btc_precision", 8))
            .and_then(|builder| builder.set_default("gateway.base_url", "http://127.0.0.1:8420"))
            .and_then(|builder| builder.set_default("gateway.timeout_secs", 30))
            .and_then(|builder| builder.build())
            .change_context(ConfigError::ReadError)?
            .try_deserialize()
            .change_context(ConfigError::DeserializeError)
    }
}
