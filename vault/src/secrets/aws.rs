//! AWS secrets engine payloads.

use super::{Validate, is_zero_i64, is_zero_u64, null_as_default, redacted, require};
use crate::error::{ValidationError, VaultError};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// Root IAM credentials written to `aws/config/root`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsRootCredentials {
    /// IAM access key ID
    pub access_key: String,
    /// IAM secret access key; never returned on read
    #[serde(skip_serializing_if = "String::is_empty")]
    pub secret_key: String,
    /// AWS region
    #[serde(skip_serializing_if = "String::is_empty")]
    pub region: String,
    /// Custom IAM endpoint
    #[serde(skip_serializing_if = "String::is_empty")]
    pub iam_endpoint: String,
    /// Custom STS endpoint
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sts_endpoint: String,
    /// SDK retry count; `-1` keeps the AWS default
    #[serde(skip_serializing_if = "is_zero_i64")]
    pub max_retries: i64,
    /// Template for generated IAM user names
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username_template: String,
}

impl fmt::Debug for AwsRootCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsRootCredentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &redacted(&self.secret_key))
            .field("region", &self.region)
            .field("iam_endpoint", &self.iam_endpoint)
            .field("sts_endpoint", &self.sts_endpoint)
            .field("max_retries", &self.max_retries)
            .field("username_template", &self.username_template)
            .finish()
    }
}

impl Validate for AwsRootCredentials {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.access_key, ValidationError::MissingAccessKey)?;
        require(&self.secret_key, ValidationError::MissingSecretKey)
    }
}

/// Lease window written to `aws/config/lease`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsLease {
    /// Default lease, e.g. `30m`
    pub lease: String,
    /// Maximum lease, e.g. `12h`
    pub lease_max: String,
}

impl Validate for AwsLease {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.lease, ValidationError::MissingLease)?;
        require(&self.lease_max, ValidationError::MissingLeaseMax)
    }
}

/// Role definition written to and read from `aws/roles/{name}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsRole {
    /// `iam_user`, `assumed_role`, `federation_token` or `session_token`
    pub credential_type: String,
    /// Role ARNs allowed to be assumed
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub role_arns: Vec<String>,
    /// Managed policy ARNs attached to issued credentials
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub policy_arns: Vec<String>,
    /// Inline IAM policy document (JSON)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub policy_document: String,
    /// IAM groups for `iam_user` credentials
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub iam_groups: Vec<String>,
    /// Tags attached to generated IAM users
    #[serde(skip_serializing_if = "BTreeMap::is_empty", deserialize_with = "null_as_default")]
    pub iam_tags: BTreeMap<String, String>,
    /// Default STS TTL in seconds
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub default_sts_ttl: u64,
    /// Maximum STS TTL in seconds
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub max_sts_ttl: u64,
    /// Path for generated IAM users
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_path: String,
    /// Permissions boundary for generated IAM users
    #[serde(skip_serializing_if = "String::is_empty")]
    pub permissions_boundary_arn: String,
    /// MFA device serial for session tokens
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mfa_serial_number: String,
}

impl Validate for AwsRole {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.credential_type, ValidationError::MissingCredentialsType)
    }
}

/// Options for issuing dynamic credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsCredentialRequest {
    /// Role ARN to assume when the role lists several
    #[serde(skip_serializing_if = "String::is_empty")]
    pub role_arn: String,
    /// Session name for assumed roles
    #[serde(skip_serializing_if = "String::is_empty")]
    pub role_session_name: String,
    /// Requested TTL, e.g. `15m`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ttl: String,
}

impl Validate for AwsCredentialRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl AwsCredentialRequest {
    /// Non-empty fields as query parameters, for `GET aws/creds/{name}`.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("role_arn", self.role_arn.as_str()),
            ("role_session_name", self.role_session_name.as_str()),
            ("ttl", self.ttl.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }
}

/// Dynamic credentials from `aws/creds/{name}`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsCredentials {
    /// Access key ID
    pub access_key: String,
    /// Secret access key
    pub secret_key: String,
    /// Session token; absent for `iam_user` credentials
    pub security_token: Option<String>,
    /// ARN of the issued identity
    #[serde(skip_serializing_if = "String::is_empty")]
    pub arn: String,
}

impl fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &redacted(&self.secret_key))
            .field(
                "security_token",
                &self.security_token.as_deref().map(redacted),
            )
            .field("arn", &self.arn)
            .finish()
    }
}

/// Credential-issuance endpoint family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwsCredentialKind {
    /// `aws/creds/{name}`
    Creds,
    /// `aws/sts/{name}`
    Sts,
}

impl AwsCredentialKind {
    /// Discriminator as used in the endpoint path.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Creds => "creds",
            Self::Sts => "sts",
        }
    }
}

impl FromStr for AwsCredentialKind {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "creds" => Ok(Self::Creds),
            "sts" => Ok(Self::Sts),
            other => Err(VaultError::InvalidCredentialType(other.to_string())),
        }
    }
}

impl fmt::Display for AwsCredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
