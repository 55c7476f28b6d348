//! AliCloud engine over [`VaultSdk`].

use crate::{
    client::VaultSdk,
    error::VaultResult,
    operation::{Operation, OperationStatus},
    provider::AlibabaEngine,
    secrets::{
        KeyList, Response,
        alicloud::{AlibabaConfig, AlibabaCredentials, AlibabaRole, AlibabaRoleData},
    },
};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use tracing::info;

static CONFIG_WRITE: Operation =
    Operation::new(Method::POST, "alicloud/config", StatusCode::NO_CONTENT);
static CONFIG_READ: Operation = Operation::new(Method::GET, "alicloud/config", StatusCode::OK);

static ROLE_WRITE: Operation =
    Operation::new(Method::POST, "alicloud/role/{name}", StatusCode::NO_CONTENT);
static ROLE_LIST: Operation = Operation::new(Method::GET, "alicloud/role", StatusCode::OK);
static ROLE_READ: Operation = Operation::new(Method::GET, "alicloud/role/{name}", StatusCode::OK);
static ROLE_DELETE: Operation =
    Operation::new(Method::DELETE, "alicloud/role/{name}", StatusCode::NO_CONTENT);

static CREDS_READ: Operation =
    Operation::new(Method::GET, "alicloud/creds/{name}", StatusCode::OK);

#[async_trait]
impl AlibabaEngine for VaultSdk {
    async fn create_alibaba_config(&self, config: &AlibabaConfig) -> VaultResult<OperationStatus> {
        self.submit(&CONFIG_WRITE, None, config).await?;
        info!("AliCloud engine configured");
        Ok(OperationStatus::Created)
    }

    async fn view_alibaba_config(&self) -> VaultResult<Response<AlibabaConfig>> {
        self.fetch(&CONFIG_READ, None).await
    }

    async fn create_alibaba_role(
        &self,
        role: &AlibabaRole,
        name: &str,
    ) -> VaultResult<OperationStatus> {
        self.submit(&ROLE_WRITE, Some(name), role).await?;
        info!(role = name, "AliCloud role written");
        Ok(OperationStatus::Created)
    }

    async fn view_alibaba_roles(&self) -> VaultResult<Response<KeyList>> {
        self.fetch(&ROLE_LIST, None).await
    }

    async fn view_alibaba_role(&self, name: &str) -> VaultResult<Response<AlibabaRoleData>> {
        self.fetch(&ROLE_READ, Some(name)).await
    }

    async fn delete_alibaba_role(&self, name: &str) -> VaultResult<OperationStatus> {
        self.exchange(&ROLE_DELETE, Some(name)).await?;
        Ok(OperationStatus::Deleted)
    }

    async fn create_alibaba_ram_creds(
        &self,
        name: &str,
    ) -> VaultResult<Response<AlibabaCredentials>> {
        self.fetch(&CREDS_READ, Some(name)).await
    }
}
