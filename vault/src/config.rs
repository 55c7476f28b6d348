//! SDK client configuration.

use crate::error::{VaultError, VaultResult};
use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};
use std::{env, time::Duration};
use url::Url;

/// Environment variable holding the API base URL.
pub const VAULT_ADDR_ENV: &str = "VAULT_ADDR";
/// Environment variable holding the API token.
pub const VAULT_TOKEN_ENV: &str = "VAULT_TOKEN";
/// Environment variable toggling TLS certificate verification.
pub const VAULT_TLS_VERIFY_ENV: &str = "VAULT_TLS_VERIFY";
/// Environment variable holding the request timeout in seconds.
pub const VAULT_TIMEOUT_ENV: &str = "VAULT_TIMEOUT_SECS";

/// SDK client configuration.
///
/// Immutable once handed to [`crate::VaultSdk::new`].
#[derive(Debug, Clone)]
pub struct SdkConfig {
    /// API base URL, e.g. `https://vault.example.com:8200/v1`
    pub base_url: String,
    /// Token sent verbatim in the `Authorization` header
    pub api_token: SecretString,
    /// Verify the server certificate chain; `false` accepts any certificate
    pub tls_verification: bool,
    /// Request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
}

impl SdkConfig {
    /// Create a new configuration with TLS verification enabled.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: SecretString::from(api_token.into()),
            tls_verification: true,
            timeout: None,
        }
    }

    /// Load configuration from environment variables (and a `.env` file if present).
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::InvalidConfig`] when a variable is missing or malformed.
    pub fn from_env() -> VaultResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from `VAULT_*` values supplied by `lookup`.
    fn from_lookup<F>(lookup: F) -> VaultResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(VAULT_ADDR_ENV)
            .ok_or_else(|| VaultError::invalid_config(format!("{VAULT_ADDR_ENV} is not set")))?;
        let api_token = lookup(VAULT_TOKEN_ENV)
            .ok_or_else(|| VaultError::invalid_config(format!("{VAULT_TOKEN_ENV} is not set")))?;

        let config = Self {
            base_url,
            api_token: SecretString::from(api_token),
            tls_verification: parse_var(VAULT_TLS_VERIFY_ENV, lookup(VAULT_TLS_VERIFY_ENV))?
                .unwrap_or(true),
            timeout: parse_var(VAULT_TIMEOUT_ENV, lookup(VAULT_TIMEOUT_ENV))?
                .map(Duration::from_secs),
        };

        config.validate()?;
        Ok(config)
    }

    /// Set TLS certificate verification.
    #[must_use]
    pub const fn with_tls_verification(mut self, verify: bool) -> Self {
        self.tls_verification = verify;
        self
    }

    /// Set request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::InvalidConfig`] for a non-http(s) base URL, an
    /// empty token, a token that cannot be sent as a header value or a zero
    /// timeout.
    pub fn validate(&self) -> VaultResult<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| VaultError::invalid_config(format!("base URL: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(VaultError::invalid_config(format!(
                "base URL: unsupported scheme {}",
                url.scheme()
            )));
        }
        let token = self.api_token.expose_secret();
        if token.is_empty() {
            return Err(VaultError::invalid_config("API token is empty"));
        }
        if HeaderValue::from_str(token).is_err() {
            return Err(VaultError::invalid_config(
                "API token is not a valid header value",
            ));
        }
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(VaultError::invalid_config("timeout must be greater than 0"));
        }
        Ok(())
    }

    /// Base URL without trailing slashes.
    #[must_use]
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Parse an optional variable value.
fn parse_var<T: std::str::FromStr>(name: &str, value: Option<String>) -> VaultResult<Option<T>>
where
    T::Err: std::fmt::Display,
{
    value
        .map(|val| {
            val.trim()
                .parse()
                .map_err(|e: T::Err| VaultError::invalid_config(format!("{name}: {e}")))
        })
        .transpose()
}
