//! Fingerprint engine
//!
//! Pure hashing of the deploy-relevant inputs of an endpoint. The pieces
//! (environment, secrets, source) are computed independently so callers can
//! recompute only what changed and recombine with [`endpoint_hash`].
//!
//! Every function initializes a SHA-256 state, feeds content only when
//! there is any, and always finalizes. Serialized content is compact JSON
//! with keys in declaration order, which keeps digests comparable with
//! fingerprints recorded by earlier deploys.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::domain::entities::{Backend, Endpoint};
use crate::domain::value_objects::Fingerprint;

/// Hash of the backend's environment variables
///
/// An empty environment hashes to the digest of the empty input.
pub fn environment_variables_hash(backend: &Backend) -> Fingerprint {
    let mut hasher = Sha256::new();
    if !backend.environment_variables.is_empty() {
        hasher.update(compact_json(
            backend
                .environment_variables
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        ));
    }
    Fingerprint::finalize(hasher)
}

/// Hash of the pinned secret versions of an endpoint
///
/// Bindings without an explicit version follow "latest", which has no
/// stable identity, so they do not contribute.
pub fn secrets_hash(endpoint: &Endpoint) -> Fingerprint {
    let mut hasher = Sha256::new();
    let versions = secret_versions(endpoint);
    if !versions.is_empty() {
        hasher.update(compact_json(versions.into_iter()));
    }
    Fingerprint::finalize(hasher)
}

/// Hash of a packaged archive's bytes; `None` hashes nothing
pub fn source_hash_of_bytes(bytes: Option<&[u8]>) -> Fingerprint {
    let mut hasher = Sha256::new();
    if let Some(bytes) = bytes {
        hasher.update(bytes);
    }
    Fingerprint::finalize(hasher)
}

/// Combined endpoint fingerprint
///
/// Digests the concatenation `environment + source + secrets` of the hex
/// strings. The order is part of the fingerprint format.
pub fn endpoint_hash(
    source_hash: impl AsRef<str>,
    environment_hash: impl AsRef<str>,
    secrets_hash: impl AsRef<str>,
) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(environment_hash.as_ref());
    hasher.update(source_hash.as_ref());
    hasher.update(secrets_hash.as_ref());
    Fingerprint::finalize(hasher)
}

/// secret name -> pinned version, first-seen order, last version wins
fn secret_versions(endpoint: &Endpoint) -> IndexMap<&str, &str> {
    let mut versions = IndexMap::new();
    for binding in &endpoint.secret_environment_variables {
        if let Some(version) = binding.pinned_version() {
            versions.insert(binding.secret.as_str(), version);
        }
    }
    versions
}

fn compact_json<'a>(entries: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let object: Map<String, Value> = entries
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect();
    Value::Object(object).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SecretEnvVar;
    use crate::domain::value_objects::Platform;

    fn sha256_hex(input: &str) -> String {
        Fingerprint::of_bytes(input.as_bytes()).as_str().to_string()
    }

    fn endpoint_with(secrets: Vec<SecretEnvVar>) -> Endpoint {
        Endpoint::new("fn", "us-central1", Platform::Gcfv2).with_secrets(secrets)
    }

    #[test]
    fn empty_environment_hashes_nothing() {
        assert_eq!(environment_variables_hash(&Backend::new()), Fingerprint::empty());
    }

    #[test]
    fn environment_is_hashed_as_compact_json_in_declaration_order() {
        let backend = Backend::new()
            .with_environment_variable("FOO", "bar")
            .with_environment_variable("API_URL", "https://example.com/v1");
        assert_eq!(
            environment_variables_hash(&backend).as_str(),
            sha256_hex(r#"{"FOO":"bar","API_URL":"https://example.com/v1"}"#)
        );
    }

    #[test]
    fn environment_values_are_json_escaped() {
        let backend = Backend::new().with_environment_variable("Q", "say \"hi\"\n");
        assert_eq!(
            environment_variables_hash(&backend).as_str(),
            sha256_hex(r#"{"Q":"say \"hi\"\n"}"#)
        );
    }

    #[test]
    fn equal_environments_hash_equal() {
        let a = Backend::new().with_environment_variable("A", "1");
        let mut b = Backend::of([Endpoint::new("x", "us-east1", Platform::Gcfv1)]);
        b.environment_variables.insert("A".to_string(), "1".to_string());
        assert_eq!(environment_variables_hash(&a), environment_variables_hash(&b));
    }

    #[test]
    fn no_secrets_hashes_nothing() {
        assert_eq!(secrets_hash(&endpoint_with(vec![])), Fingerprint::empty());
    }

    #[test]
    fn unversioned_secrets_are_excluded() {
        let endpoint = endpoint_with(vec![
            SecretEnvVar::pinned("A_KEY", "A", "1"),
            SecretEnvVar::latest("B_KEY", "B"),
        ]);
        assert_eq!(secrets_hash(&endpoint).as_str(), sha256_hex(r#"{"A":"1"}"#));
    }

    #[test]
    fn only_unversioned_secrets_hash_nothing() {
        let endpoint = endpoint_with(vec![SecretEnvVar::latest("B_KEY", "B")]);
        assert_eq!(secrets_hash(&endpoint), Fingerprint::empty());
    }

    #[test]
    fn repeated_secret_keeps_position_and_last_version() {
        let endpoint = endpoint_with(vec![
            SecretEnvVar::pinned("K1", "A", "1"),
            SecretEnvVar::pinned("K2", "B", "7"),
            SecretEnvVar::pinned("K3", "A", "2"),
        ]);
        assert_eq!(
            secrets_hash(&endpoint).as_str(),
            sha256_hex(r#"{"A":"2","B":"7"}"#)
        );
    }

    #[test]
    fn source_hash_of_nothing_is_empty_digest() {
        assert_eq!(source_hash_of_bytes(None), Fingerprint::empty());
        assert_eq!(source_hash_of_bytes(Some(&b""[..])), Fingerprint::empty());
        assert_eq!(
            source_hash_of_bytes(Some(&b"PK\x03\x04"[..])),
            Fingerprint::of_bytes(b"PK\x03\x04")
        );
    }

    #[test]
    fn endpoint_hash_concatenates_env_source_secrets() {
        assert_eq!(endpoint_hash("s", "e", "x").as_str(), sha256_hex("esx"));
    }

    #[test]
    fn endpoint_hash_is_order_sensitive() {
        assert_ne!(endpoint_hash("x", "y", "z"), endpoint_hash("y", "x", "z"));
        assert_ne!(endpoint_hash("x", "y", "z"), endpoint_hash("x", "z", "y"));
    }

    #[test]
    fn endpoint_hash_accepts_fingerprints() {
        let env = Fingerprint::empty();
        let source = Fingerprint::of_bytes(b"zip");
        let secrets = Fingerprint::empty();
        let expected = sha256_hex(&format!("{}{}{}", env, source, secrets));
        assert_eq!(endpoint_hash(&source, &env, &secrets).as_str(), expected);
    }
}
