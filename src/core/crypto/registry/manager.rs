/*!
Registry manager for key types and signature algorithms.

The catalog is a pair of immutable static tables. Every key type entry
carries the generator that produces it, so enumeration, membership and
dispatch all read the same rows and cannot drift apart. Adding a key
type is one new row.
*/

use tracing::warn;

use crate::core::crypto::algorithms::{
    EcCurve, EcdsaGenerator, Ed25519Generator, RsaGenerator, X25519Generator,
};
use crate::core::crypto::traits::KeyPairGenerator;
use crate::core::crypto::types::algorithms::{KeyType, SignatureAlgorithm};
use crate::core::crypto::types::keys::GeneratedKeyPair;
use crate::core::error::{Error, Result};

/// One row of the key type catalog
pub struct KeyTypeEntry {
    /// Key type served by this row
    pub key_type: KeyType,
    /// Generator producing keys of this type
    pub generator: &'static dyn KeyPairGenerator,
}

/// Supported key types, in declaration order
pub static KEY_TYPE_REGISTRY: [KeyTypeEntry; 8] = [
    KeyTypeEntry { key_type: KeyType::Ed25519, generator: &Ed25519Generator },
    KeyTypeEntry { key_type: KeyType::X25519, generator: &X25519Generator },
    KeyTypeEntry { key_type: KeyType::Secp256k1, generator: &EcdsaGenerator::new(EcCurve::Secp256k1) },
    KeyTypeEntry { key_type: KeyType::P224, generator: &EcdsaGenerator::new(EcCurve::P224) },
    KeyTypeEntry { key_type: KeyType::P256, generator: &EcdsaGenerator::new(EcCurve::P256) },
    KeyTypeEntry { key_type: KeyType::P384, generator: &EcdsaGenerator::new(EcCurve::P384) },
    KeyTypeEntry { key_type: KeyType::P521, generator: &EcdsaGenerator::new(EcCurve::P521) },
    KeyTypeEntry { key_type: KeyType::Rsa, generator: &RsaGenerator },
];

/// Supported signature algorithms, in declaration order
pub static SIGNATURE_ALGORITHMS: [SignatureAlgorithm; 5] = [
    SignatureAlgorithm::EdDsa,
    SignatureAlgorithm::Es256k,
    SignatureAlgorithm::Es256,
    SignatureAlgorithm::Es384,
    SignatureAlgorithm::Ps256,
];

// Lookup

/// Resolve a key type identifier (exact, case-sensitive match)
pub fn lookup_key_type(name: &str) -> Option<KeyType> {
    KEY_TYPE_REGISTRY
        .iter()
        .find(|entry| entry.key_type.as_str() == name)
        .map(|entry| entry.key_type)
}

/// Resolve a signature algorithm identifier (exact, case-sensitive match)
pub fn lookup_signature_algorithm(name: &str) -> Option<SignatureAlgorithm> {
    SIGNATURE_ALGORITHMS
        .iter()
        .find(|alg| alg.as_str() == name)
        .copied()
}

/// Get the generator registered for a key type identifier
pub fn get_key_generator(name: &str) -> Option<&'static dyn KeyPairGenerator> {
    KEY_TYPE_REGISTRY
        .iter()
        .find(|entry| entry.key_type.as_str() == name)
        .map(|entry| entry.generator)
}

/// Get the generator registered for a key type
pub fn generator_for(key_type: KeyType) -> &'static dyn KeyPairGenerator {
    KEY_TYPE_REGISTRY
        .iter()
        .find(|entry| entry.key_type == key_type)
        .map(|entry| entry.generator)
        .unwrap_or_else(|| unreachable!("every key type has a registry row"))
}

// Membership

/// Check whether a string names a supported key type
pub fn is_supported_key_type(name: &str) -> bool {
    lookup_key_type(name).is_some()
}

/// Check whether a string names a supported signature algorithm
pub fn is_supported_signature_algorithm(name: &str) -> bool {
    lookup_signature_algorithm(name).is_some()
}

// Enumeration

/// List all supported key types in declaration order
pub fn list_supported_key_types() -> Vec<String> {
    KEY_TYPE_REGISTRY
        .iter()
        .map(|entry| entry.key_type.as_str().to_string())
        .collect()
}

/// List all supported signature algorithms in declaration order
pub fn list_supported_signature_algorithms() -> Vec<String> {
    SIGNATURE_ALGORITHMS
        .iter()
        .map(|alg| alg.as_str().to_string())
        .collect()
}

/// Supported key types as a JSON array of strings
pub fn supported_key_types_json() -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(&list_supported_key_types())?)
}

/// Supported signature algorithms as a JSON array of strings
pub fn supported_signature_algorithms_json() -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(&list_supported_signature_algorithms())?)
}

// Dispatch

/// Generate a key pair for a key type identifier
pub fn generate_key(name: &str) -> Result<GeneratedKeyPair> {
    let generator =
        get_key_generator(name).ok_or_else(|| Error::UnsupportedKeyType(name.to_string()))?;

    generator.generate().inspect_err(|e| {
        warn!(key_type = %generator.key_type(), error = %e, "Key generation failed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_defaults() {
        assert!(is_supported_key_type("Ed25519"));
        assert!(is_supported_key_type("secp256k1"));
        assert!(is_supported_key_type("RSA"));
        assert!(is_supported_signature_algorithm("EdDSA"));
        assert!(is_supported_signature_algorithm("PS256"));

        assert_eq!(lookup_key_type("P-384"), Some(KeyType::P384));
        assert_eq!(lookup_signature_algorithm("ES256K"), Some(SignatureAlgorithm::Es256k));
    }

    #[test]
    fn test_unknown_names_are_not_supported() {
        assert!(!is_supported_key_type("bn254"));
        assert!(!is_supported_key_type("ed25519"));
        assert!(!is_supported_key_type(""));
        assert!(!is_supported_signature_algorithm("HMAC-SHA256"));
        assert!(get_key_generator("P256").is_none());
    }

    #[test]
    fn test_rows_and_generators_agree() {
        for entry in KEY_TYPE_REGISTRY.iter() {
            assert_eq!(entry.generator.key_type(), entry.key_type);
            assert_eq!(generator_for(entry.key_type).key_type(), entry.key_type);
        }
    }

    #[test]
    fn test_rows_are_unique() {
        let names = list_supported_key_types();
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name), "duplicate row for {}", name);
        }
        let algs = list_supported_signature_algorithms();
        for (i, alg) in algs.iter().enumerate() {
            assert!(!algs[i + 1..].contains(alg), "duplicate row for {}", alg);
        }
    }

    #[test]
    fn test_signature_algorithms_pair_with_registered_key_types() {
        for alg in SIGNATURE_ALGORITHMS.iter() {
            assert!(is_supported_key_type(alg.key_type().as_str()));
        }
    }

    #[test]
    fn test_list_json() {
        let json = supported_signature_algorithms_json().unwrap();
        assert_eq!(json, br#"["EdDSA","ES256K","ES256","ES384","PS256"]"#.to_vec());
    }

    #[test]
    fn test_generate_key_dispatch() {
        let pair = generate_key("P-256").unwrap();
        assert_eq!(pair.shape(), "ellipticCurve");

        assert!(matches!(generate_key("bn254"), Err(Error::UnsupportedKeyType(name)) if name == "bn254"));
    }
}
