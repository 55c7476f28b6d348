//! Shared proptest generators.
//!
//! Generated values are shaped like what Vault and its engines accept.

use proptest::prelude::*;

/// Generate resource names (roles, libraries) without slashes.
pub fn resource_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,30}"
}

/// Generate API base URLs, with and without trailing slashes.
pub fn base_url_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("http"), Just("https")],
        "[a-z][a-z0-9-]{2,15}",
        1024u16..65535,
        prop_oneof![Just(""), Just("/"), Just("//")],
    )
        .prop_map(|(scheme, host, port, trailing)| {
            format!("{scheme}://{host}.example.com:{port}/v1{trailing}")
        })
}

/// Generate Vault service tokens.
pub fn vault_token_strategy() -> impl Strategy<Value = String> {
    "hvs\\.[A-Za-z0-9]{24}"
}

/// Generate secret values (passwords, secret keys).
pub fn secret_value_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9!@#$%^&*]{12,64}"
}

/// Generate LDAP bind distinguished names.
pub fn bind_dn_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{3,12}", "[a-z]{3,10}").prop_map(|(cn, dc)| format!("cn={cn},ou=Users,dc={dc},dc=com"))
}

/// Generate AD service account names.
pub fn service_account_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9.]{2,15}@example\\.com"
}

/// Generate AWS-style access key IDs.
pub fn access_key_strategy() -> impl Strategy<Value = String> {
    "AKIA[A-Z0-9]{16}"
}

/// Generate lease durations such as `45m` or `12h`.
pub fn lease_duration_strategy() -> impl Strategy<Value = String> {
    (1u32..720, prop_oneof![Just("s"), Just("m"), Just("h")])
        .prop_map(|(n, unit)| format!("{n}{unit}"))
}

/// Generate AWS role credential types.
pub fn credential_type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("iam_user".to_string()),
        Just("assumed_role".to_string()),
        Just("federation_token".to_string()),
        Just("session_token".to_string()),
    ]
}

/// Generate credential-subtype discriminators other than `creds` and `sts`.
pub fn invalid_credential_kind_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_]{0,12}".prop_filter("valid kind", |s| s != "creds" && s != "sts")
}

/// Generate HTTP status codes other than `excluded`.
pub fn other_status_strategy(excluded: u16) -> impl Strategy<Value = u16> {
    prop_oneof![
        Just(200u16),
        Just(204),
        Just(400),
        Just(403),
        Just(404),
        Just(429),
        Just(500),
        Just(503),
    ]
    .prop_filter("expected status", move |s| *s != excluded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::strategy::ValueTree;
    use proptest::test_runner::TestRunner;

    #[test]
    fn test_base_url_format() {
        let mut runner = TestRunner::default();
        for _ in 0..10 {
            let value = base_url_strategy()
                .new_tree(&mut runner)
                .unwrap()
                .current();
            assert!(value.starts_with("http"));
            assert!(value.contains("/v1"));
        }
    }

    #[test]
    fn test_resource_name_has_no_slash() {
        let mut runner = TestRunner::default();
        for _ in 0..10 {
            let value = resource_name_strategy()
                .new_tree(&mut runner)
                .unwrap()
                .current();
            assert!(!value.is_empty());
            assert!(!value.contains('/'));
        }
    }

    #[test]
    fn test_invalid_kind_excludes_valid() {
        let mut runner = TestRunner::default();
        for _ in 0..10 {
            let value = invalid_credential_kind_strategy()
                .new_tree(&mut runner)
                .unwrap()
                .current();
            assert_ne!(value, "creds");
            assert_ne!(value, "sts");
        }
    }

    #[test]
    fn test_other_status_excludes_expected() {
        let mut runner = TestRunner::default();
        for _ in 0..10 {
            let value = other_status_strategy(204)
                .new_tree(&mut runner)
                .unwrap()
                .current();
            assert_ne!(value, 204);
        }
    }
}
