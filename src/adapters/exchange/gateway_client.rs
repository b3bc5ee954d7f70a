use chrono::Utc;
use error_stack::{report, ResultExt};
use hmac::{Hmac, Mac};
use reqwest::Client;
use sha2::Sha512;
use tracing::instrument;

use crate::{
    domain::exchange::Exchange,
    ports::{CancelContext, ExchangeBalances, ExchangeClient, ExchangeClientError},
};

type HmacSha512 = Hmac<Sha512>;

pub const API_KEY_HEADER: &str = "X-Api-Key";
pub const NONCE_HEADER: &str = "X-Api-Nonce";
pub const SIGNATURE_HEADER: &str = "X-Api-Sign";

/// Client for the balance gateway, the service that speaks each exchange's private
/// API. One instance serves one exchange.
///
/// `GET {base_url}/v1/{exchange}/balances` answers with
/// `{"BTC": {"amount": "1.5", "btc_value": "1.5"}, ...}`.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    exchange: Exchange,
    base_url: String,
}

impl GatewayClient {
    pub fn new(client: Client, exchange: Exchange, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            exchange,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn balances_path(&self) -> String {
        format!("/v1/{}/balances", self.exchange)
    }

    async fn request_balances(
        &self,
        key: &str,
        secret: &str,
    ) -> error_stack::Result<String, ExchangeClientError> {
        let path = self.balances_path();
        let nonce = Utc::now().timestamp_millis().to_string();
        let signature = sign(secret, &format!("{nonce}{path}"))?;

        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .header(API_KEY_HEADER, key)
            .header(NONCE_HEADER, &nonce)
            .header(SIGNATURE_HEADER, signature)
            .send()
            .await
            .map_err(|error| report!(ExchangeClientError::HttpError(error.to_string())))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(report!(ExchangeClientError::HttpStatusError(format!(
                "{status}: {error_text}"
            ))));
        }

        response
            .text()
            .await
            .map_err(|error| report!(ExchangeClientError::HttpError(error.to_string())))
    }
}

/// Lowercase hex HMAC-SHA512 of `payload` keyed with `secret`.
pub fn sign(secret: &str, payload: &str) -> error_stack::Result<String, ExchangeClientError> {
    let mut mac = HmacSha512::new_from_slice(secret.as_bytes())
        .map_err(|_| report!(ExchangeClientError::SigningError))?;
    mac.update(payload.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

pub fn decode_balances(body: &str) -> error_stack::Result<ExchangeBalances, ExchangeClientError> {
    serde_json::from_str(body)
        .change_context(ExchangeClientError::JsonError)
        .attach_printable_lazy(|| format!("Response body: {body}"))
}

#[async_trait::async_trait]
impl ExchangeClient for GatewayClient {
    #[instrument(skip(self, ctx, key, secret), fields(exchange = %self.exchange))]
    async fn get_balances(
        &self,
        ctx: &CancelContext,
        key: &str,
        secret: &str,
    ) -> error_stack::Result<ExchangeBalances, ExchangeClientError> {
        if ctx.is_cancelled() {
            return Err(report!(ExchangeClientError::Cancelled));
        }

        let body = tokio::select! {
            _ = ctx.cancelled() => return Err(report!(ExchangeClientError::Cancelled)),
            body = self.request_balances(key, secret) => body?,
        };

        decode_balances(&body)
    }
}
