//! Vault secrets-engine client.

use crate::{
    config::SdkConfig,
    error::{VaultError, VaultResult},
    operation::Operation,
    secrets::Validate,
    transport::{Transport, TransportResponse},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};
use url::Url;

/// Concrete SDK client.
///
/// Holds no mutable state: share it freely between tasks.
#[derive(Debug, Clone)]
pub struct VaultSdk {
    base_url: String,
    transport: Transport,
}

impl VaultSdk {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::InvalidConfig`] for an invalid configuration and
    /// [`VaultError::Http`] if the HTTP client cannot be built.
    pub fn new(config: SdkConfig) -> VaultResult<Self> {
        config.validate()?;
        let transport = Transport::new(&config)?;

        Ok(Self {
            base_url: config.trimmed_base_url().to_string(),
            transport,
        })
    }

    /// Create a client from `VAULT_*` environment variables.
    ///
    /// # Errors
    ///
    /// See [`SdkConfig::from_env`] and [`VaultSdk::new`].
    pub fn from_env() -> VaultResult<Self> {
        Self::new(SdkConfig::from_env()?)
    }

    /// Base URL every endpoint path is appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run `op` without a request body.
    #[instrument(skip(self, op), fields(method = %op.method, path = op.path))]
    pub(crate) async fn exchange(
        &self,
        op: &Operation,
        name: Option<&str>,
    ) -> VaultResult<TransportResponse> {
        let url = op.url(&self.base_url, name)?;
        self.transport
            .send(op.method.clone(), &url, None, op.expected)
            .await
    }

    /// Run `op` without a body, appending `query` pairs to the URL.
    #[instrument(skip(self, op, query), fields(method = %op.method, path = op.path, params = query.len()))]
    pub(crate) async fn exchange_with_query(
        &self,
        op: &Operation,
        name: Option<&str>,
        query: &[(&str, &str)],
    ) -> VaultResult<TransportResponse> {
        let url = with_query(&op.url(&self.base_url, name)?, query)?;
        self.transport
            .send(op.method.clone(), &url, None, op.expected)
            .await
    }

    /// Validate and serialize `payload`, then run `op` with it as body.
    #[instrument(skip(self, op, payload), fields(method = %op.method, path = op.path))]
    pub(crate) async fn submit<P>(
        &self,
        op: &Operation,
        name: Option<&str>,
        payload: &P,
    ) -> VaultResult<TransportResponse>
    where
        P: Validate + Serialize + Sync + ?Sized,
    {
        payload.validate()?;
        let url = op.url(&self.base_url, name)?;
        let body = serde_json::to_vec(payload)?;
        debug!(body_len = body.len(), "Submitting payload");

        self.transport
            .send(op.method.clone(), &url, Some(body), op.expected)
            .await
    }

    /// Run `op` without a body and decode the response.
    pub(crate) async fn fetch<R: DeserializeOwned>(
        &self,
        op: &Operation,
        name: Option<&str>,
    ) -> VaultResult<R> {
        let response = self.exchange(op, name).await?;
        decode(&response)
    }
}

/// Append percent-encoded `query` pairs to `url`.
fn with_query(url: &str, query: &[(&str, &str)]) -> VaultResult<String> {
    if query.is_empty() {
        return Ok(url.to_string());
    }
    let mut url =
        Url::parse(url).map_err(|e| VaultError::invalid_config(format!("request URL: {e}")))?;
    url.query_pairs_mut().extend_pairs(query);
    Ok(url.into())
}

/// Decode a response body.
pub(crate) fn decode<R: DeserializeOwned>(response: &TransportResponse) -> VaultResult<R> {
    serde_json::from_slice(&response.body).map_err(VaultError::from)
}
