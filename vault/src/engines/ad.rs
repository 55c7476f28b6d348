//! Active Directory engine over [`VaultSdk`].

use crate::{
    client::{VaultSdk, decode},
    error::VaultResult,
    operation::{Operation, OperationStatus},
    provider::ActiveDirectoryEngine,
    secrets::{
        KeyList, Response,
        ad::{
            AccountStatus, AdConfig, AdConfigData, AdCredentials, AdLibrary, AdLibraryData,
            AdRole, AdRoleData, CheckInData, CheckInRequest, CheckOutData, CheckOutRequest,
        },
    },
};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use std::collections::HashMap;
use tracing::info;

static CONFIG_WRITE: Operation = Operation::new(Method::POST, "ad/config", StatusCode::NO_CONTENT);
static CONFIG_READ: Operation = Operation::new(Method::GET, "ad/config", StatusCode::OK);
static CONFIG_DELETE: Operation =
    Operation::new(Method::DELETE, "ad/config", StatusCode::NO_CONTENT);

static ROLE_WRITE: Operation =
    Operation::new(Method::POST, "ad/roles/{name}", StatusCode::NO_CONTENT);
static ROLE_LIST: Operation = Operation::new(Method::GET, "ad/roles", StatusCode::OK);
static ROLE_READ: Operation = Operation::new(Method::GET, "ad/roles/{name}", StatusCode::OK);
static ROLE_DELETE: Operation =
    Operation::new(Method::DELETE, "ad/roles/{name}", StatusCode::NO_CONTENT);

static CREDS_READ: Operation = Operation::new(Method::GET, "ad/creds/{name}", StatusCode::OK);

static LIBRARY_WRITE: Operation =
    Operation::new(Method::POST, "ad/library/{name}", StatusCode::NO_CONTENT);
static LIBRARY_LIST: Operation = Operation::new(Method::GET, "ad/library", StatusCode::OK);
static LIBRARY_READ: Operation = Operation::new(Method::GET, "ad/library/{name}", StatusCode::OK);
static LIBRARY_DELETE: Operation =
    Operation::new(Method::DELETE, "ad/library/{name}", StatusCode::NO_CONTENT);

static CHECK_OUT: Operation =
    Operation::new(Method::POST, "ad/library/{name}/check-out", StatusCode::OK);
static CHECK_IN: Operation =
    Operation::new(Method::POST, "ad/library/{name}/check-in", StatusCode::OK);
static MANAGE_CHECK_IN: Operation =
    Operation::new(Method::POST, "ad/library/manage/{name}/check-in", StatusCode::OK);
static CHECK_STATUS: Operation =
    Operation::new(Method::GET, "ad/library/{name}/status", StatusCode::OK);

#[async_trait]
impl ActiveDirectoryEngine for VaultSdk {
    async fn create_ad_config(&self, config: &AdConfig) -> VaultResult<OperationStatus> {
        self.submit(&CONFIG_WRITE, None, config).await?;
        info!("AD engine configured");
        Ok(OperationStatus::Created)
    }

    async fn view_ad_config(&self) -> VaultResult<Response<AdConfigData>> {
        self.fetch(&CONFIG_READ, None).await
    }

    async fn delete_ad_config(&self) -> VaultResult<OperationStatus> {
        self.exchange(&CONFIG_DELETE, None).await?;
        Ok(OperationStatus::Deleted)
    }

    async fn create_ad_role(&self, role: &AdRole, name: &str) -> VaultResult<OperationStatus> {
        self.submit(&ROLE_WRITE, Some(name), role).await?;
        info!(role = name, "AD role written");
        Ok(OperationStatus::Created)
    }

    async fn view_ad_roles(&self) -> VaultResult<Response<KeyList>> {
        self.fetch(&ROLE_LIST, None).await
    }

    async fn view_ad_role(&self, name: &str) -> VaultResult<Response<AdRoleData>> {
        self.fetch(&ROLE_READ, Some(name)).await
    }

    async fn delete_ad_role(&self, name: &str) -> VaultResult<OperationStatus> {
        self.exchange(&ROLE_DELETE, Some(name)).await?;
        Ok(OperationStatus::Deleted)
    }

    async fn view_ad_creds(&self, name: &str) -> VaultResult<Response<AdCredentials>> {
        self.fetch(&CREDS_READ, Some(name)).await
    }

    async fn create_ad_library(
        &self,
        library: &AdLibrary,
        name: &str,
    ) -> VaultResult<OperationStatus> {
        self.submit(&LIBRARY_WRITE, Some(name), library).await?;
        info!(
            library = name,
            accounts = library.service_account_names.len(),
            "AD library written"
        );
        Ok(OperationStatus::Created)
    }

    async fn view_ad_library(&self, name: &str) -> VaultResult<Response<AdLibraryData>> {
        self.fetch(&LIBRARY_READ, Some(name)).await
    }

    async fn view_ad_libraries(&self) -> VaultResult<Response<KeyList>> {
        self.fetch(&LIBRARY_LIST, None).await
    }

    async fn delete_ad_library(&self, name: &str) -> VaultResult<OperationStatus> {
        self.exchange(&LIBRARY_DELETE, Some(name)).await?;
        Ok(OperationStatus::Deleted)
    }

    async fn ad_check_out(
        &self,
        name: &str,
        request: &CheckOutRequest,
    ) -> VaultResult<Response<CheckOutData>> {
        let response = self.submit(&CHECK_OUT, Some(name), request).await?;
        decode(&response)
    }

    async fn ad_check_in(
        &self,
        name: &str,
        request: &CheckInRequest,
        manage: bool,
    ) -> VaultResult<Response<CheckInData>> {
        let op = if manage { &MANAGE_CHECK_IN } else { &CHECK_IN };
        let response = self.submit(op, Some(name), request).await?;
        decode(&response)
    }

    async fn ad_check_status(
        &self,
        name: &str,
    ) -> VaultResult<Response<HashMap<String, AccountStatus>>> {
        self.fetch(&CHECK_STATUS, Some(name)).await
    }
}
