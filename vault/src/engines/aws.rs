//! AWS engine over [`VaultSdk`].

use crate::{
    client::VaultSdk,
    error::VaultResult,
    operation::{Operation, OperationStatus},
    provider::AwsEngine,
    secrets::{
        KeyList, Response,
        aws::{
            AwsCredentialKind, AwsCredentialRequest, AwsCredentials, AwsLease, AwsRole,
            AwsRootCredentials,
        },
    },
};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use tracing::info;

static ROOT_WRITE: Operation =
    Operation::new(Method::POST, "aws/config/root", StatusCode::NO_CONTENT);
static ROOT_READ: Operation = Operation::new(Method::GET, "aws/config/root", StatusCode::OK);
static ROOT_ROTATE: Operation =
    Operation::new(Method::POST, "aws/config/rotate-root", StatusCode::OK);

static LEASE_WRITE: Operation =
    Operation::new(Method::POST, "aws/config/lease", StatusCode::NO_CONTENT);
static LEASE_READ: Operation = Operation::new(Method::GET, "aws/config/lease", StatusCode::OK);

static ROLE_WRITE: Operation =
    Operation::new(Method::POST, "aws/roles/{name}", StatusCode::NO_CONTENT);
static ROLE_LIST: Operation = Operation::new(Method::GET, "aws/roles", StatusCode::OK);
static ROLE_READ: Operation = Operation::new(Method::GET, "aws/roles/{name}", StatusCode::OK);
static ROLE_DELETE: Operation =
    Operation::new(Method::DELETE, "aws/roles/{name}", StatusCode::NO_CONTENT);

static CREDS_ISSUE: Operation = Operation::new(Method::GET, "aws/creds/{name}", StatusCode::OK);
static STS_ISSUE: Operation =
    Operation::new(Method::POST, "aws/sts/{name}", StatusCode::NO_CONTENT);

#[async_trait]
impl AwsEngine for VaultSdk {
    async fn create_aws_root_creds(
        &self,
        creds: &AwsRootCredentials,
    ) -> VaultResult<OperationStatus> {
        self.submit(&ROOT_WRITE, None, creds).await?;
        info!("AWS root credentials written");
        Ok(OperationStatus::Created)
    }

    async fn view_aws_root_config(&self) -> VaultResult<Response<AwsRootCredentials>> {
        self.fetch(&ROOT_READ, None).await
    }

    async fn rotate_aws_root_creds(&self) -> VaultResult<OperationStatus> {
        self.exchange(&ROOT_ROTATE, None).await?;
        info!("AWS root credentials rotated");
        Ok(OperationStatus::Rotated)
    }

    async fn configure_aws_lease(&self, lease: &AwsLease) -> VaultResult<OperationStatus> {
        self.submit(&LEASE_WRITE, None, lease).await?;
        Ok(OperationStatus::Configured)
    }

    async fn view_aws_lease(&self) -> VaultResult<Response<AwsLease>> {
        self.fetch(&LEASE_READ, None).await
    }

    async fn create_aws_role(&self, role: &AwsRole, name: &str) -> VaultResult<OperationStatus> {
        self.submit(&ROLE_WRITE, Some(name), role).await?;
        info!(role = name, credential_type = %role.credential_type, "AWS role written");
        Ok(OperationStatus::Created)
    }

    async fn view_aws_roles(&self) -> VaultResult<Response<KeyList>> {
        self.fetch(&ROLE_LIST, None).await
    }

    async fn view_aws_role(&self, name: &str) -> VaultResult<Response<AwsRole>> {
        self.fetch(&ROLE_READ, Some(name)).await
    }

    async fn delete_aws_role(&self, name: &str) -> VaultResult<OperationStatus> {
        self.exchange(&ROLE_DELETE, Some(name)).await?;
        Ok(OperationStatus::Deleted)
    }

    async fn create_aws_creds(
        &self,
        request: &AwsCredentialRequest,
        cred_type: &str,
        name: &str,
    ) -> VaultResult<OperationStatus> {
        match cred_type.parse::<AwsCredentialKind>()? {
            AwsCredentialKind::Creds => {
                self.exchange_with_query(&CREDS_ISSUE, Some(name), &request.query_pairs())
                    .await?;
            }
            AwsCredentialKind::Sts => {
                self.submit(&STS_ISSUE, Some(name), request).await?;
            }
        }
        Ok(OperationStatus::Created)
    }

    async fn view_aws_creds(&self, name: &str) -> VaultResult<Response<AwsCredentials>> {
        self.fetch(&CREDS_ISSUE, Some(name)).await
    }
}
