//! Shared setup for the engine tests.

#![allow(dead_code)]

use tracing_subscriber::EnvFilter;
use vault_engines_sdk::{SdkConfig, VaultSdk};
use wiremock::MockServer;

/// Token every stub expects in the `Authorization` header.
pub const TOKEN: &str = "hvs.CAESIJ2v7zxqwertyuiop";

/// Install a test-writer subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Start a stub server and a client pointed at its `/v1` prefix.
pub async fn start() -> (MockServer, VaultSdk) {
    init_tracing();
    let server = MockServer::start().await;
    let sdk = VaultSdk::new(SdkConfig::new(format!("{}/v1", server.uri()), TOKEN))
        .expect("client builds");
    (server, sdk)
}

/// Number of requests the stub server has seen.
pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map_or(0, |requests| requests.len())
}
