//! Property tests for the fingerprint engine.

use proptest::prelude::*;

use fnstage::domain::entities::{Backend, Endpoint, SecretEnvVar};
use fnstage::domain::services::{
    endpoint_hash, environment_variables_hash, secrets_hash, source_hash_of_bytes,
};
use fnstage::{Fingerprint, Platform};

fn env_entries() -> impl Strategy<Value = Vec<(String, String)>> {
    let key = proptest::string::string_regex("[A-Z][A-Z0-9_]{0,11}").unwrap();
    let value = proptest::string::string_regex("[ -~]{0,24}").unwrap();
    proptest::collection::vec((key, value), 0..8)
}

fn backend_with(entries: &[(String, String)]) -> Backend {
    entries
        .iter()
        .fold(Backend::new(), |b, (k, v)| b.with_environment_variable(k.clone(), v.clone()))
}

fn hex() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9a-f]{64}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: equal environments (same entries, same order) hash equal,
    /// and every hash is a well-formed fingerprint.
    #[test]
    fn property_environment_hash_is_deterministic(entries in env_entries()) {
        let a = environment_variables_hash(&backend_with(&entries));
        let b = environment_variables_hash(&backend_with(&entries));
        prop_assert_eq!(&a, &b);
        prop_assert!(Fingerprint::parse(a.as_str()).is_some());
    }

    /// PROPERTY: unversioned secret bindings never change the secrets hash.
    #[test]
    fn property_unversioned_secrets_do_not_contribute(
        pinned in proptest::collection::vec(("[a-z]{1,8}", "[0-9]{1,3}"), 0..5),
        latest in proptest::collection::vec("[a-z]{1,8}", 0..5),
    ) {
        let pinned_only: Vec<SecretEnvVar> = pinned
            .iter()
            .map(|(secret, version)| SecretEnvVar::pinned("K", secret.clone(), version.clone()))
            .collect();
        let mut with_latest = pinned_only.clone();
        with_latest.extend(
            latest
                .iter()
                .map(|secret| SecretEnvVar::latest("L", format!("latest-{secret}"))),
        );

        let a = Endpoint::new("fn", "us-central1", Platform::Gcfv2).with_secrets(pinned_only);
        let b = Endpoint::new("fn", "us-central1", Platform::Gcfv2).with_secrets(with_latest);
        prop_assert_eq!(secrets_hash(&a), secrets_hash(&b));
    }

    /// PROPERTY: the source hash changes exactly when the bytes change.
    #[test]
    fn property_source_hash_tracks_bytes(
        a in proptest::collection::vec(any::<u8>(), 0..256),
        b in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let ha = source_hash_of_bytes(Some(a.as_slice()));
        let hb = source_hash_of_bytes(Some(b.as_slice()));
        prop_assert_eq!(a == b, ha == hb);
    }

    /// PROPERTY: the endpoint hash depends on argument order.
    #[test]
    fn property_endpoint_hash_is_order_sensitive(x in hex(), y in hex(), z in hex()) {
        prop_assume!(x != y);
        prop_assert_ne!(endpoint_hash(&x, &y, &z), endpoint_hash(&y, &x, &z));
    }
}
