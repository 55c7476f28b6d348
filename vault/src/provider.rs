//! Capability traits enumerating every engine operation.
//!
//! Callers depend on these rather than on [`crate::VaultSdk`], so a test
//! double can stand in for the real client.

use crate::{
    error::VaultResult,
    operation::OperationStatus,
    secrets::{
        KeyList, Response,
        ad::{
            AccountStatus, AdConfig, AdConfigData, AdCredentials, AdLibrary, AdLibraryData,
            AdRole, AdRoleData, CheckInData, CheckInRequest, CheckOutData, CheckOutRequest,
        },
        alicloud::{AlibabaConfig, AlibabaCredentials, AlibabaRole, AlibabaRoleData},
        aws::{
            AwsCredentialRequest, AwsCredentials, AwsLease, AwsRole, AwsRootCredentials,
        },
    },
};
use async_trait::async_trait;
use std::collections::HashMap;

/// Active Directory secrets engine (`ad/`).
#[async_trait]
pub trait ActiveDirectoryEngine: Send + Sync {
    /// Write the engine connection configuration.
    async fn create_ad_config(&self, config: &AdConfig) -> VaultResult<OperationStatus>;

    /// Read the engine configuration.
    async fn view_ad_config(&self) -> VaultResult<Response<AdConfigData>>;

    /// Delete the engine configuration.
    async fn delete_ad_config(&self) -> VaultResult<OperationStatus>;

    /// Create or update a role.
    async fn create_ad_role(&self, role: &AdRole, name: &str) -> VaultResult<OperationStatus>;

    /// List role names.
    async fn view_ad_roles(&self) -> VaultResult<Response<KeyList>>;

    /// Read a role.
    async fn view_ad_role(&self, name: &str) -> VaultResult<Response<AdRoleData>>;

    /// Delete a role.
    async fn delete_ad_role(&self, name: &str) -> VaultResult<OperationStatus>;

    /// Read the current credentials of a role's service account.
    async fn view_ad_creds(&self, name: &str) -> VaultResult<Response<AdCredentials>>;

    /// Create or update a service-account library.
    async fn create_ad_library(
        &self,
        library: &AdLibrary,
        name: &str,
    ) -> VaultResult<OperationStatus>;

    /// Read a library.
    async fn view_ad_library(&self, name: &str) -> VaultResult<Response<AdLibraryData>>;

    /// List library names.
    async fn view_ad_libraries(&self) -> VaultResult<Response<KeyList>>;

    /// Delete a library.
    async fn delete_ad_library(&self, name: &str) -> VaultResult<OperationStatus>;

    /// Borrow an account from a library.
    async fn ad_check_out(
        &self,
        name: &str,
        request: &CheckOutRequest,
    ) -> VaultResult<Response<CheckOutData>>;

    /// Return accounts to a library; `manage` uses the administrative endpoint.
    async fn ad_check_in(
        &self,
        name: &str,
        request: &CheckInRequest,
        manage: bool,
    ) -> VaultResult<Response<CheckInData>>;

    /// Availability of every account in a library.
    async fn ad_check_status(
        &self,
        name: &str,
    ) -> VaultResult<Response<HashMap<String, AccountStatus>>>;
}

/// AliCloud secrets engine (`alicloud/`).
#[async_trait]
pub trait AlibabaEngine: Send + Sync {
    /// Write the root credentials.
    async fn create_alibaba_config(&self, config: &AlibabaConfig) -> VaultResult<OperationStatus>;

    /// Read the engine configuration.
    async fn view_alibaba_config(&self) -> VaultResult<Response<AlibabaConfig>>;

    /// Create or update a role.
    async fn create_alibaba_role(
        &self,
        role: &AlibabaRole,
        name: &str,
    ) -> VaultResult<OperationStatus>;

    /// List role names.
    async fn view_alibaba_roles(&self) -> VaultResult<Response<KeyList>>;

    /// Read a role.
    async fn view_alibaba_role(&self, name: &str) -> VaultResult<Response<AlibabaRoleData>>;

    /// Delete a role.
    async fn delete_alibaba_role(&self, name: &str) -> VaultResult<OperationStatus>;

    /// Issue RAM credentials for a role.
    async fn create_alibaba_ram_creds(
        &self,
        name: &str,
    ) -> VaultResult<Response<AlibabaCredentials>>;
}

/// AWS secrets engine (`aws/`).
#[async_trait]
pub trait AwsEngine: Send + Sync {
    /// Write the root IAM credentials.
    async fn create_aws_root_creds(
        &self,
        creds: &AwsRootCredentials,
    ) -> VaultResult<OperationStatus>;

    /// Read the root configuration.
    async fn view_aws_root_config(&self) -> VaultResult<Response<AwsRootCredentials>>;

    /// Rotate the root IAM credentials.
    async fn rotate_aws_root_creds(&self) -> VaultResult<OperationStatus>;

    /// Configure the lease window.
    async fn configure_aws_lease(&self, lease: &AwsLease) -> VaultResult<OperationStatus>;

    /// Read the lease window.
    async fn view_aws_lease(&self) -> VaultResult<Response<AwsLease>>;

    /// Create or update a role.
    async fn create_aws_role(&self, role: &AwsRole, name: &str) -> VaultResult<OperationStatus>;

    /// List role names.
    async fn view_aws_roles(&self) -> VaultResult<Response<KeyList>>;

    /// Read a role.
    async fn view_aws_role(&self, name: &str) -> VaultResult<Response<AwsRole>>;

    /// Delete a role.
    async fn delete_aws_role(&self, name: &str) -> VaultResult<OperationStatus>;

    /// Issue credentials through `aws/{cred_type}/{name}`, `cred_type` being
    /// `creds` or `sts`.
    ///
    /// `sts` posts `request` as the JSON body; `creds` sends its non-empty
    /// fields as query parameters.
    async fn create_aws_creds(
        &self,
        request: &AwsCredentialRequest,
        cred_type: &str,
        name: &str,
    ) -> VaultResult<OperationStatus>;

    /// Issue credentials and return them.
    async fn view_aws_creds(&self, name: &str) -> VaultResult<Response<AwsCredentials>>;
}

/// Every engine the SDK speaks.
pub trait SecretsEngineSdk: ActiveDirectoryEngine + AlibabaEngine + AwsEngine {}

impl<T> SecretsEngineSdk for T where T: ActiveDirectoryEngine + AlibabaEngine + AwsEngine {}
