//! Single authenticated HTTP exchange.
//!
//! Every request carries `Authorization: <token>` and
//! `Content-Type: application/json`. A response is accepted only when its
//! status equals the one expected status; anything else becomes
//! [`VaultError::UnexpectedStatus`].

use crate::{
    config::SdkConfig,
    error::{VaultError, VaultResult},
};
use reqwest::{
    Client, Method, StatusCode,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

/// Accepted response of a single exchange.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// Response status (always the expected one)
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw response body
    pub body: Vec<u8>,
}

/// Vault JSON error body.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<String>,
}

/// HTTP transport bound to one API token.
#[derive(Debug, Clone)]
pub struct Transport {
    http: Client,
    token: SecretString,
}

impl Transport {
    /// Build the transport from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Http`] if the underlying client cannot be built.
    pub fn new(config: &SdkConfig) -> VaultResult<Self> {
        let mut builder = Client::builder()
            .use_rustls_tls()
            .danger_accept_invalid_certs(!config.tls_verification);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(VaultError::Http)?;

        Ok(Self {
            http,
            token: config.api_token.clone(),
        })
    }

    /// Perform one exchange and accept it only on `expected`.
    ///
    /// # Errors
    ///
    /// - [`VaultError::InvalidConfig`] if the token is not a valid header value
    /// - [`VaultError::Http`] on request construction or network failure
    /// - [`VaultError::UnexpectedStatus`] when the status differs from `expected`
    #[instrument(skip(self, body), fields(body_len = body.as_ref().map_or(0, Vec::len)))]
    pub async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
        expected: StatusCode,
    ) -> VaultResult<TransportResponse> {
        let mut auth = HeaderValue::from_str(self.token.expose_secret())
            .map_err(|_| VaultError::invalid_config("API token is not a valid header value"))?;
        auth.set_sensitive(true);

        let mut request = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, auth)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(b) = body {
            request = request.body(b);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        if status != expected {
            let errors = serde_json::from_slice::<ErrorBody>(&body)
                .map(|b| b.errors)
                .unwrap_or_default();
            warn!(
                status = status.as_u16(),
                expected = expected.as_u16(),
                "Unexpected response status"
            );
            return Err(VaultError::unexpected_status(
                status.as_u16(),
                expected.as_u16(),
                errors,
            ));
        }

        debug!(status = status.as_u16(), body_len = body.len(), "Exchange completed");
        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
