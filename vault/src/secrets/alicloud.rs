//! AliCloud secrets engine payloads.

use super::{Validate, is_zero_u64, null_as_default, redacted, require};
use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Root credentials written to `alicloud/config`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlibabaConfig {
    /// RAM access key ID
    pub access_key: String,
    /// RAM access key secret; never returned on read
    #[serde(skip_serializing_if = "String::is_empty")]
    pub secret_key: String,
}

impl fmt::Debug for AlibabaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlibabaConfig")
            .field("access_key", &self.access_key)
            .field("secret_key", &redacted(&self.secret_key))
            .finish()
    }
}

impl Validate for AlibabaConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.access_key, ValidationError::MissingAccessKey)?;
        require(&self.secret_key, ValidationError::MissingSecretKey)
    }
}

/// Role definition written to `alicloud/role/{name}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlibabaRole {
    /// ARN of a role to assume (STS credentials)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub role_arn: String,
    /// Existing policies, as `name:...,type:...` strings
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub remote_policies: Vec<String>,
    /// Inline policy document (JSON)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub inline_policies: String,
    /// Credential TTL in seconds
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub ttl: u64,
    /// Maximum credential TTL in seconds
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub max_ttl: u64,
}

impl Validate for AlibabaRole {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Role as read back from `alicloud/role/{name}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlibabaRoleData {
    /// Role name
    pub name: String,
    /// Kind of credentials the role issues
    pub credential_type: String,
    /// ARN of the assumed role
    pub role_arn: String,
    /// Attached remote policies
    #[serde(deserialize_with = "null_as_default")]
    pub remote_policies: Vec<serde_json::Value>,
    /// Attached inline policies
    #[serde(deserialize_with = "null_as_default")]
    pub inline_policies: Vec<serde_json::Value>,
    /// Credential TTL in seconds
    pub ttl: u64,
    /// Maximum credential TTL in seconds
    pub max_ttl: u64,
}

/// Dynamic RAM credentials from `alicloud/creds/{name}`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlibabaCredentials {
    /// Access key ID
    pub access_key: String,
    /// Access key secret
    pub secret_key: String,
    /// STS security token, for role-ARN credentials
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_token: Option<String>,
    /// Expiry of STS credentials
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<DateTime<Utc>>,
}

impl fmt::Debug for AlibabaCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlibabaCredentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &redacted(&self.secret_key))
            .field(
                "security_token",
                &self.security_token.as_deref().map(redacted),
            )
            .field("expiration", &self.expiration)
            .finish()
    }
}
