/*!
Cryptographic components.

This module provides the capability registry, the key pair generators
built on external primitives, and the records they produce.
*/

// Identifier enums and boundary records
pub mod types;

// Generator trait
pub mod traits;

// Key generation primitives
pub mod algorithms;

// Config
pub mod config;

// Registry for key types and signature algorithms
pub mod registry;

// Re-export frequently used types
pub use types::{
    EllipticCurveKeyPair, GeneratedKeyPair, KeyType, RawKeyPair, RsaKeyPair, SignatureAlgorithm,
};
pub use traits::KeyPairGenerator;
pub use config::CryptoConfig;
pub use registry::{
    generate_key, get_key_generator, is_supported_key_type, is_supported_signature_algorithm,
    list_supported_key_types, list_supported_signature_algorithms, supported_key_types_json,
    supported_signature_algorithms_json,
};
