/*!
Mobile-facing API.

This module is the surface bound into platform code: capability queries
that answer with JSON arrays or plain booleans, and one generation call
per key type returning a boundary record. Every call is independent and
safe to invoke from any thread.
*/

use tracing::warn;

use crate::core::crypto::algorithms::{EcCurve, generate_ed25519, generate_rsa2048, generate_x25519};
use crate::core::crypto::registry;
use crate::core::crypto::types::algorithms::KeyType;
use crate::core::crypto::types::keys::{EllipticCurveKeyPair, GeneratedKeyPair, RawKeyPair, RsaKeyPair};
use crate::core::error::Result;

fn logged<T>(key_type: KeyType, result: Result<T>) -> Result<T> {
    result.inspect_err(|e| warn!(key_type = %key_type, error = %e, "Key generation failed"))
}

// Capability queries

/// Supported key types as a JSON array of strings
pub fn get_supported_key_types() -> Result<Vec<u8>> {
    registry::supported_key_types_json()
}

/// Check whether `key_type` exactly names a supported key type
pub fn is_supported_key_type(key_type: &str) -> bool {
    registry::is_supported_key_type(key_type)
}

/// Supported signature algorithms as a JSON array of strings
pub fn get_supported_signature_algorithms() -> Result<Vec<u8>> {
    registry::supported_signature_algorithms_json()
}

/// Check whether `algorithm` exactly names a supported signature algorithm
pub fn is_supported_signature_algorithm(algorithm: &str) -> bool {
    registry::is_supported_signature_algorithm(algorithm)
}

// Key generation

/// Generate an Ed25519 key pair.
///
/// The private key is the 64-byte keypair encoding (seed followed by the
/// public key), the public key is 32 bytes.
pub fn generate_ed25519_key() -> Result<RawKeyPair> {
    logged(KeyType::Ed25519, generate_ed25519())
}

/// Generate an X25519 key pair (32-byte private and public keys)
pub fn generate_x25519_key() -> Result<RawKeyPair> {
    logged(KeyType::X25519, generate_x25519())
}

/// Generate a secp256k1 key pair with 32-byte coordinates and scalar
pub fn generate_secp256k1_key() -> Result<EllipticCurveKeyPair> {
    logged(KeyType::Secp256k1, EcCurve::Secp256k1.generate())
}

/// Generate a P-224 key pair with 28-byte coordinates and scalar
pub fn generate_p224_key() -> Result<EllipticCurveKeyPair> {
    logged(KeyType::P224, EcCurve::P224.generate())
}

/// Generate a P-256 key pair with 32-byte coordinates and scalar
pub fn generate_p256_key() -> Result<EllipticCurveKeyPair> {
    logged(KeyType::P256, EcCurve::P256.generate())
}

/// Generate a P-384 key pair with 48-byte coordinates and scalar
pub fn generate_p384_key() -> Result<EllipticCurveKeyPair> {
    logged(KeyType::P384, EcCurve::P384.generate())
}

/// Generate a P-521 key pair with 66-byte coordinates and scalar
pub fn generate_p521_key() -> Result<EllipticCurveKeyPair> {
    logged(KeyType::P521, EcCurve::P521.generate())
}

/// Generate an RSA key pair with a 2048-bit modulus.
///
/// The modulus and private exponent are 256 bytes, each prime 128 bytes.
pub fn generate_rsa2048_key() -> Result<RsaKeyPair> {
    logged(KeyType::Rsa, generate_rsa2048())
}

/// Generate a key pair for a key type identifier.
///
/// Unknown identifiers fail with `Error::UnsupportedKeyType`.
pub fn generate_key(key_type: &str) -> Result<GeneratedKeyPair> {
    registry::generate_key(key_type)
}

/// Generate a key pair and serialize it to JSON for the boundary
pub fn generate_key_json(key_type: &str) -> Result<Vec<u8>> {
    generate_key(key_type)?.to_json()
}
