//! Active Directory secrets engine payloads.

use super::{Validate, is_false, is_zero_u64, null_as_default, redacted, require};
use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection and password settings written to `ad/config`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdConfig {
    /// Default password TTL in seconds
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub ttl: u64,
    /// Maximum password TTL in seconds
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub max_ttl: u64,
    /// Password policy used to generate passwords
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password_policy: String,
    /// LDAP server URL(s), comma separated
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Connection timeout in seconds
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub request_timeout: u64,
    /// Issue StartTLS after connecting
    #[serde(skip_serializing_if = "is_false")]
    pub starttls: bool,
    /// Skip LDAP server certificate verification
    #[serde(skip_serializing_if = "is_false")]
    pub insecure_tls: bool,
    /// PEM CA certificate for the LDAP server
    #[serde(skip_serializing_if = "String::is_empty")]
    pub certificate: String,
    /// Distinguished name used to bind
    pub binddn: String,
    /// Password used with `binddn`
    pub bindpass: String,
    /// Base DN for user search
    #[serde(skip_serializing_if = "String::is_empty")]
    pub userdn: String,
    /// UPN domain appended to the bind name
    #[serde(skip_serializing_if = "String::is_empty")]
    pub upndomain: String,
    /// Tolerance in seconds when comparing the last rotation time
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub last_rotation_tolerance: u64,
}

impl fmt::Debug for AdConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdConfig")
            .field("ttl", &self.ttl)
            .field("max_ttl", &self.max_ttl)
            .field("password_policy", &self.password_policy)
            .field("url", &self.url)
            .field("request_timeout", &self.request_timeout)
            .field("starttls", &self.starttls)
            .field("insecure_tls", &self.insecure_tls)
            .field("binddn", &self.binddn)
            .field("bindpass", &redacted(&self.bindpass))
            .field("userdn", &self.userdn)
            .field("upndomain", &self.upndomain)
            .field("last_rotation_tolerance", &self.last_rotation_tolerance)
            .finish_non_exhaustive()
    }
}

impl Validate for AdConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.binddn, ValidationError::MissingBindDn)?;
        require(&self.bindpass, ValidationError::MissingBindPass)
    }
}

/// Configuration as read back from `ad/config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdConfigData {
    /// Settings shared with [`AdConfig`]
    #[serde(flatten)]
    pub config: AdConfig,
    /// Legacy password formatter
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub formatter: String,
    /// Legacy password length
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub length: u64,
    /// Maximum TLS version
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tls_max_version: String,
    /// Minimum TLS version
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tls_min_version: String,
    /// Pre-1.1.1 group CN behaviour
    #[serde(default, skip_serializing_if = "is_false")]
    pub use_pre111_group_cn_behavior: bool,
}

/// Role mapping a name to a pre-existing service account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdRole {
    /// Service account managed by the role
    pub service_account_name: String,
    /// Password TTL, defaults to the engine TTL
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ttl: String,
}

impl Validate for AdRole {
    fn validate(&self) -> Result<(), ValidationError> {
        require(
            &self.service_account_name,
            ValidationError::MissingServiceAccountName,
        )
    }
}

/// Role as read back from `ad/roles/{name}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdRoleData {
    /// Service account managed by the role
    pub service_account_name: String,
    /// Password TTL in seconds
    pub ttl: u64,
    /// Last rotation performed by Vault
    pub last_vault_rotation: Option<DateTime<Utc>>,
    /// `pwdLastSet` reported by the directory
    pub password_last_set: Option<DateTime<Utc>>,
}

/// Current credentials of a role's service account.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdCredentials {
    /// Account name
    pub username: String,
    /// Current password
    pub current_password: String,
    /// Previous password
    pub last_password: String,
}

impl fmt::Debug for AdCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdCredentials")
            .field("username", &self.username)
            .field("current_password", &redacted(&self.current_password))
            .field("last_password", &redacted(&self.last_password))
            .finish()
    }
}

/// Service-account library (check-out pool).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdLibrary {
    /// Accounts in the pool
    #[serde(deserialize_with = "null_as_default")]
    pub service_account_names: Vec<String>,
    /// Default check-out TTL
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ttl: String,
    /// Maximum check-out TTL
    #[serde(skip_serializing_if = "String::is_empty")]
    pub max_ttl: String,
    /// Allow any entity to check an account back in
    #[serde(skip_serializing_if = "is_false")]
    pub disable_check_in_enforcement: bool,
}

impl Validate for AdLibrary {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.service_account_names.is_empty()
            || self.service_account_names.iter().any(String::is_empty)
        {
            return Err(ValidationError::MissingServiceAccountName);
        }
        Ok(())
    }
}

/// Library as read back from `ad/library/{name}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdLibraryData {
    /// Accounts in the pool
    #[serde(deserialize_with = "null_as_default")]
    pub service_account_names: Vec<String>,
    /// Default check-out TTL in seconds
    pub ttl: u64,
    /// Maximum check-out TTL in seconds
    pub max_ttl: u64,
    /// Allow any entity to check an account back in
    pub disable_check_in_enforcement: bool,
}

/// Body of a library check-out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckOutRequest {
    /// Requested lease TTL, defaults to the library TTL
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ttl: String,
}

impl Validate for CheckOutRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Account handed out by a check-out.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckOutData {
    /// Account checked out
    pub service_account_name: String,
    /// Its current password
    pub password: String,
}

impl fmt::Debug for CheckOutData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckOutData")
            .field("service_account_name", &self.service_account_name)
            .field("password", &redacted(&self.password))
            .finish()
    }
}

/// Body of a library check-in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckInRequest {
    /// Accounts to return; may be empty when the caller holds exactly one
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub service_account_names: Vec<String>,
}

impl Validate for CheckInRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Accounts returned by a check-in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckInData {
    /// Accounts checked in
    #[serde(deserialize_with = "null_as_default")]
    pub check_ins: Vec<String>,
}

/// Availability of one library account, keyed by account name in the status map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountStatus {
    /// Account can be checked out
    pub available: bool,
    /// Token accessor of the current borrower
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borrower_client_token: Option<String>,
    /// Entity of the current borrower
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borrower_entity_id: Option<String>,
}
