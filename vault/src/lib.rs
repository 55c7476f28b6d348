//! Typed client for HashiCorp Vault secrets engines.
//!
//! Covers the Active Directory (`ad/`), AliCloud (`alicloud/`) and AWS
//! (`aws/`) engines. Every operation validates its payload, serializes it to
//! JSON and performs a single authenticated exchange that succeeds only on
//! the operation's expected status.
//!
//! ```no_run
//! use vault_engines_sdk::{AwsEngine, SdkConfig, VaultSdk, secrets::aws::AwsLease};
//!
//! # async fn run() -> vault_engines_sdk::VaultResult<()> {
//! let sdk = VaultSdk::new(SdkConfig::new("https://vault.example.com:8200/v1", "s.token"))?;
//! let lease = AwsLease {
//!     lease: "30m".to_string(),
//!     lease_max: "12h".to_string(),
//! };
//! assert_eq!(sdk.configure_aws_lease(&lease).await?.to_string(), "configured");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod config;
mod engines;
pub mod error;
pub mod operation;
pub mod provider;
pub mod secrets;
pub mod transport;

pub use client::VaultSdk;
pub use config::SdkConfig;
pub use error::{ValidationError, VaultError, VaultResult};
pub use operation::{Operation, OperationStatus};
pub use provider::{ActiveDirectoryEngine, AlibabaEngine, AwsEngine, SecretsEngineSdk};
pub use secrets::{KeyList, Response, Validate};
