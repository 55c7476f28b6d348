//! Active Directory engine against a stub Vault.

mod common;

use common::{TOKEN, request_count, start};
use serde_json::json;
use test_utils::fixtures;
use vault_engines_sdk::{
    ActiveDirectoryEngine, OperationStatus, ValidationError, VaultError,
    secrets::ad::{AdConfig, AdLibrary, AdRole, CheckInRequest, CheckOutRequest},
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn bind_config() -> AdConfig {
    AdConfig {
        binddn: "cn=vault,ou=Users,dc=example,dc=com".to_string(),
        bindpass: "secret".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn create_config_returns_created() {
    let (server, sdk) = start().await;
    Mock::given(method("POST"))
        .and(path("/v1/ad/config"))
        .and(header("authorization", TOKEN))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "binddn": "cn=vault,ou=Users,dc=example,dc=com",
            "bindpass": "secret"
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let status = sdk.create_ad_config(&bind_config()).await.unwrap();
    assert_eq!(status, OperationStatus::Created);
    assert_eq!(status.to_string(), "created");
}

#[tokio::test]
async fn create_config_without_bindpass_never_calls_server() {
    let (server, sdk) = start().await;
    let config = AdConfig {
        bindpass: String::new(),
        ..bind_config()
    };

    let err = sdk.create_ad_config(&config).await.unwrap_err();
    assert!(matches!(
        err,
        VaultError::Validation(ValidationError::MissingBindPass)
    ));
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn create_config_rejects_unexpected_status() {
    let (server, sdk) = start().await;
    Mock::given(method("POST"))
        .and(path("/v1/ad/config"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(fixtures::error_body(&["invalid binddn"])),
        )
        .mount(&server)
        .await;

    let err = sdk.create_ad_config(&bind_config()).await.unwrap_err();
    match err {
        VaultError::UnexpectedStatus { got, want, errors } => {
            assert_eq!((got, want), (400, 204));
            assert_eq!(errors, vec!["invalid binddn".to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn view_config_decodes_envelope() {
    let (server, sdk) = start().await;
    Mock::given(method("GET"))
        .and(path("/v1/ad/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::ad_config()))
        .mount(&server)
        .await;

    let response = sdk.view_ad_config().await.unwrap();
    assert_eq!(response.request_id, fixtures::REQUEST_ID);
    assert_eq!(
        response.data.config.binddn,
        "cn=vault,ou=Users,dc=example,dc=com"
    );
    assert_eq!(response.data.config.url, "ldaps://ldap.example.com");
    assert_eq!(response.data.config.request_timeout, 90);
    assert_eq!(response.data.tls_min_version, "tls12");
}

#[tokio::test]
async fn view_config_surfaces_missing_resource() {
    let (server, sdk) = start().await;
    Mock::given(method("GET"))
        .and(path("/v1/ad/config"))
        .respond_with(ResponseTemplate::new(404).set_body_json(fixtures::error_body(&[])))
        .mount(&server)
        .await;

    let err = sdk.view_ad_config().await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn delete_config_returns_deleted() {
    let (server, sdk) = start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/ad/config"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(
        sdk.delete_ad_config().await.unwrap(),
        OperationStatus::Deleted
    );
}

#[tokio::test]
async fn role_lifecycle_uses_named_paths() {
    let (server, sdk) = start().await;
    Mock::given(method("POST"))
        .and(path("/v1/ad/roles/app"))
        .and(body_json(json!({"service_account_name": "app@example.com", "ttl": "1h"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/ad/roles/app"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::ad_role("app@example.com")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/ad/roles/app"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let role = AdRole {
        service_account_name: "app@example.com".to_string(),
        ttl: "1h".to_string(),
    };
    assert_eq!(
        sdk.create_ad_role(&role, "app").await.unwrap(),
        OperationStatus::Created
    );

    let read = sdk.view_ad_role("app").await.unwrap();
    assert_eq!(read.data.service_account_name, "app@example.com");
    assert_eq!(read.data.ttl, 100);
    assert!(read.data.last_vault_rotation.is_some());

    assert_eq!(
        sdk.delete_ad_role("app").await.unwrap(),
        OperationStatus::Deleted
    );
}

#[tokio::test]
async fn role_operations_require_name() {
    let (server, sdk) = start().await;
    let role = AdRole {
        service_account_name: "app@example.com".to_string(),
        ttl: String::new(),
    };

    for err in [
        sdk.create_ad_role(&role, "").await.unwrap_err(),
        sdk.view_ad_role("").await.unwrap_err(),
        sdk.delete_ad_role("/").await.unwrap_err(),
    ] {
        assert!(matches!(
            err,
            VaultError::Validation(ValidationError::MissingName)
        ));
    }
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn names_cannot_escape_their_resource_path() {
    let (server, sdk) = start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    for name in ["../config", "..", "app#frag", "app?x=1", "a/b", "%2e%2e"] {
        let err = sdk.delete_ad_role(name).await.unwrap_err();
        assert!(
            matches!(err, VaultError::Validation(ValidationError::InvalidName)),
            "{name:?} was sent"
        );
    }
    let err = sdk.view_ad_library("../../config").await.unwrap_err();
    assert!(matches!(
        err,
        VaultError::Validation(ValidationError::InvalidName)
    ));
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn view_roles_lists_keys() {
    let (server, sdk) = start().await;
    Mock::given(method("GET"))
        .and(path("/v1/ad/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::key_list(&["app", "ops"])))
        .mount(&server)
        .await;

    let roles = sdk.view_ad_roles().await.unwrap();
    assert_eq!(roles.data.keys, vec!["app", "ops"]);
}

#[tokio::test]
async fn view_creds_decodes_passwords() {
    let (server, sdk) = start().await;
    Mock::given(method("GET"))
        .and(path("/v1/ad/creds/app"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::ad_creds("app")))
        .mount(&server)
        .await;

    let creds = sdk.view_ad_creds("app").await.unwrap();
    assert_eq!(creds.data.username, "app");
    assert!(creds.data.current_password.starts_with("?@09AZ"));
    assert_ne!(creds.data.current_password, creds.data.last_password);
}

#[tokio::test]
async fn library_lifecycle() {
    let (server, sdk) = start().await;
    Mock::given(method("POST"))
        .and(path("/v1/ad/library/accounting-team"))
        .and(body_json(json!({
            "service_account_names": ["fizz@example.com", "buzz@example.com"],
            "ttl": "10h"
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/ad/library/accounting-team"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(fixtures::ad_library(&["fizz@example.com", "buzz@example.com"])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/ad/library"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::key_list(&["accounting-team"])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/ad/library/accounting-team"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let library = AdLibrary {
        service_account_names: vec![
            "fizz@example.com".to_string(),
            "buzz@example.com".to_string(),
        ],
        ttl: "10h".to_string(),
        ..Default::default()
    };
    assert_eq!(
        sdk.create_ad_library(&library, "accounting-team").await.unwrap(),
        OperationStatus::Created
    );

    let read = sdk.view_ad_library("accounting-team").await.unwrap();
    assert_eq!(read.data.service_account_names.len(), 2);
    assert_eq!(read.data.ttl, 36000);

    let all = sdk.view_ad_libraries().await.unwrap();
    assert_eq!(all.data.keys, vec!["accounting-team"]);

    assert_eq!(
        sdk.delete_ad_library("accounting-team").await.unwrap(),
        OperationStatus::Deleted
    );
}

#[tokio::test]
async fn library_without_accounts_never_calls_server() {
    let (server, sdk) = start().await;
    let with_blank = AdLibrary {
        service_account_names: vec![String::new(), "fizz@example.com".to_string()],
        ..Default::default()
    };

    for library in [AdLibrary::default(), with_blank] {
        let err = sdk
            .create_ad_library(&library, "accounting-team")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            VaultError::Validation(ValidationError::MissingServiceAccountName)
        ));
    }
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn check_out_returns_borrowed_account() {
    let (server, sdk) = start().await;
    Mock::given(method("POST"))
        .and(path("/v1/ad/library/accounting-team/check-out"))
        .and(body_json(json!({"ttl": "1h"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::check_out("fizz@example.com")))
        .expect(1)
        .mount(&server)
        .await;

    let request = CheckOutRequest {
        ttl: "1h".to_string(),
    };
    let response = sdk.ad_check_out("accounting-team", &request).await.unwrap();
    assert_eq!(response.data.service_account_name, "fizz@example.com");
    assert!(!response.data.password.is_empty());
    assert!(response.renewable);
    assert_eq!(response.lease_duration, 36000);
}

#[tokio::test]
async fn check_in_selects_endpoint_by_manage_flag() {
    let (server, sdk) = start().await;
    Mock::given(method("POST"))
        .and(path("/v1/ad/library/accounting-team/check-in"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::check_in(&["fizz@example.com"])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/ad/library/manage/accounting-team/check-in"))
        .and(body_json(json!({"service_account_names": ["buzz@example.com"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::check_in(&["buzz@example.com"])))
        .expect(1)
        .mount(&server)
        .await;

    let own = sdk
        .ad_check_in("accounting-team", &CheckInRequest::default(), false)
        .await
        .unwrap();
    assert_eq!(own.data.check_ins, vec!["fizz@example.com"]);

    let forced = CheckInRequest {
        service_account_names: vec!["buzz@example.com".to_string()],
    };
    let managed = sdk
        .ad_check_in("accounting-team", &forced, true)
        .await
        .unwrap();
    assert_eq!(managed.data.check_ins, vec!["buzz@example.com"]);
}

#[tokio::test]
async fn check_in_tolerates_null_list() {
    let (server, sdk) = start().await;
    Mock::given(method("POST"))
        .and(path("/v1/ad/library/accounting-team/check-in"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"check_ins": null}})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/ad/library"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"keys": null}})))
        .mount(&server)
        .await;

    let response = sdk
        .ad_check_in("accounting-team", &CheckInRequest::default(), false)
        .await
        .unwrap();
    assert!(response.data.check_ins.is_empty());
    assert!(sdk.view_ad_libraries().await.unwrap().data.keys.is_empty());
}

#[tokio::test]
async fn check_status_maps_accounts() {
    let (server, sdk) = start().await;
    Mock::given(method("GET"))
        .and(path("/v1/ad/library/accounting-team/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(fixtures::library_status("buzz@example.com", "fizz@example.com")),
        )
        .mount(&server)
        .await;

    let status = sdk.ad_check_status("accounting-team").await.unwrap();
    assert_eq!(status.data.len(), 2);
    assert!(status.data["buzz@example.com"].available);

    let borrowed = &status.data["fizz@example.com"];
    assert!(!borrowed.available);
    assert_eq!(
        borrowed.borrower_entity_id.as_deref(),
        Some("631256b1-8523-9838-5501-d0a1e2cdad9c")
    );
}
