//! Request and response payloads for the supported secrets engines.
//!
//! Request fields holding their zero value are omitted from the JSON body.
//! Response types default every absent field.

use crate::error::ValidationError;
use serde::{Deserialize, Deserializer, Serialize};

pub mod ad;
pub mod alicloud;
pub mod aws;

/// Required-field check run before a payload leaves the process.
pub trait Validate {
    /// Return the first missing required field, if any.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] naming the missing field.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Vault response envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Response<T> {
    /// Request identifier assigned by the server
    pub request_id: String,
    /// Lease identifier for leased secrets
    pub lease_id: String,
    /// Whether the lease can be renewed
    pub renewable: bool,
    /// Lease duration in seconds
    pub lease_duration: u64,
    /// Engine-specific payload
    pub data: T,
    /// Response-wrapping information
    pub wrap_info: Option<serde_json::Value>,
    /// Server warnings
    pub warnings: Option<Vec<String>>,
    /// Auth block, unused by secrets engines
    pub auth: Option<serde_json::Value>,
}

/// Result of a collection view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyList {
    /// Resource names
    #[serde(deserialize_with = "null_as_default")]
    pub keys: Vec<String>,
}

/// Checks a required string field.
pub(crate) fn require(value: &str, missing: ValidationError) -> Result<(), ValidationError> {
    if value.is_empty() { Err(missing) } else { Ok(()) }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) const fn is_zero_u64(value: &u64) -> bool {
    *value == 0
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) const fn is_zero_i64(value: &i64) -> bool {
    *value == 0
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) const fn is_false(value: &bool) -> bool {
    !*value
}

/// Reads JSON `null` as the field's default; Vault encodes empty lists as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Debug placeholder for secret fields.
pub(crate) const fn redacted(value: &str) -> &'static str {
    if value.is_empty() { "" } else { "[REDACTED]" }
}
