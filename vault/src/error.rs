//! SDK error types using thiserror 2.0.
//!
//! Validation failures are raised before any network activity; everything
//! else maps to one distinguishable [`VaultError`] variant.

use thiserror::Error;

/// A request payload or resource name is unusable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Access key is empty
    #[error("missing access key")]
    MissingAccessKey,

    /// Secret key is empty
    #[error("missing secret key")]
    MissingSecretKey,

    /// Resource name is empty
    #[error("missing name")]
    MissingName,

    /// Resource name would address a different path
    #[error("invalid name: must be a single path segment")]
    InvalidName,

    /// Default lease is empty
    #[error("missing lease")]
    MissingLease,

    /// Maximum lease is empty
    #[error("missing lease max")]
    MissingLeaseMax,

    /// Bind DN is empty
    #[error("missing binddn parameter")]
    MissingBindDn,

    /// Bind password is empty
    #[error("missing bindpass parameter")]
    MissingBindPass,

    /// No service account name given
    #[error("missing service account name")]
    MissingServiceAccountName,

    /// Credential type is empty
    #[error("missing credentials type")]
    MissingCredentialsType,
}

/// SDK errors.
#[derive(Error, Debug)]
pub enum VaultError {
    /// Request payload failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Credential subtype discriminator is neither `sts` nor `creds`
    #[error("Invalid AWS credentials type {0:?}: expected \"sts\" or \"creds\"")]
    InvalidCredentialType(String),

    /// Response status differs from the status the operation expects
    #[error("Unexpected status {got} (expected {want}){}", format_errors(.errors))]
    UnexpectedStatus {
        /// Status returned by the server
        got: u16,
        /// Status the operation expects
        want: u16,
        /// Error messages from the Vault error body, if any
        errors: Vec<String>,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for SDK operations.
pub type VaultResult<T> = Result<T, VaultError>;

fn format_errors(errors: &[String]) -> String {
    if errors.is_empty() {
        String::new()
    } else {
        format!(": {}", errors.join("; "))
    }
}

impl VaultError {
    /// Check if error is retryable.
    ///
    /// Advisory only: the SDK never retries on its own.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::UnexpectedStatus { got, .. } => *got == 429 || *got >= 500,
            _ => false,
        }
    }

    /// Check if error was raised by payload validation.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Status returned by the server for an unexpected-status error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { got, .. } => Some(*got),
            _ => None,
        }
    }

    /// Create an unexpected status error.
    #[must_use]
    pub const fn unexpected_status(got: u16, want: u16, errors: Vec<String>) -> Self {
        Self::UnexpectedStatus { got, want, errors }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
