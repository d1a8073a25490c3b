/*!
# SSI Mobile Crypto

Capability negotiation and key generation for decentralized-identity
mobile clients.

## Overview

This library reports which key types and signature algorithms the host
supports and generates key pairs for each supported key type:

- Ed25519 and X25519 key pairs as raw byte strings
- secp256k1, P-224, P-256, P-384 and P-521 key pairs as fixed-width
  coordinates and scalar
- RSA-2048 key pairs as modulus, exponents and prime factors

Results are plain records that serialize to JSON, so they can cross
into platform code through the C API (`ffi` feature) or WebAssembly
(`wasm` feature).

Key material comes from external primitives (`ed25519-dalek`,
`x25519-dalek`, the RustCrypto curve crates and `rsa`) seeded by the
operating system CSPRNG. Records zeroize their contents on drop.
*/

// Core components
pub mod core;

// Mobile-facing API
pub mod api;

// Language bindings
pub mod bindings;

// Re-export commonly used types for convenience
pub use crate::core::error::{Error, KeyGenerationCause, Result};
pub use crate::core::constants::{RSA_KEY_BITS, sizes};
pub use crate::core::crypto::{
    CryptoConfig, EllipticCurveKeyPair, GeneratedKeyPair, KeyPairGenerator, KeyType, RawKeyPair,
    RsaKeyPair, SignatureAlgorithm,
};
pub use crate::core::crypto::algorithms::{EcCurve, EcdsaGenerator, Ed25519Generator, RsaGenerator, X25519Generator};

// Re-export the registry
pub use crate::core::crypto::registry::{
    KEY_TYPE_REGISTRY, SIGNATURE_ALGORITHMS, get_key_generator, list_supported_key_types,
    list_supported_signature_algorithms,
};

// Re-export the mobile surface
pub use api::{
    generate_ed25519_key, generate_key, generate_key_json, generate_p224_key, generate_p256_key,
    generate_p384_key, generate_p521_key, generate_rsa2048_key, generate_secp256k1_key,
    generate_x25519_key, get_supported_key_types, get_supported_signature_algorithms,
    is_supported_key_type, is_supported_signature_algorithm,
};
