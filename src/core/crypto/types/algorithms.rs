/*!
Algorithm type definitions.

This module defines the key type and signature algorithm identifiers
exposed across the mobile boundary.
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};

/// Supported key types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyType {
    /// Ed25519 signing keys
    #[serde(rename = "Ed25519")]
    Ed25519,
    /// X25519 key agreement keys
    #[serde(rename = "X25519")]
    X25519,
    /// secp256k1 (Koblitz) ECDSA keys
    #[serde(rename = "secp256k1")]
    Secp256k1,
    /// NIST P-224 ECDSA keys
    #[serde(rename = "P-224")]
    P224,
    /// NIST P-256 ECDSA keys
    #[serde(rename = "P-256")]
    P256,
    /// NIST P-384 ECDSA keys
    #[serde(rename = "P-384")]
    P384,
    /// NIST P-521 ECDSA keys
    #[serde(rename = "P-521")]
    P521,
    /// RSA keys (2048-bit modulus)
    #[serde(rename = "RSA")]
    Rsa,
}

impl Default for KeyType {
    fn default() -> Self {
        KeyType::Ed25519
    }
}

impl KeyType {
    /// Canonical identifier of the key type
    pub const fn as_str(&self) -> &'static str {
        match self {
            KeyType::Ed25519 => "Ed25519",
            KeyType::X25519 => "X25519",
            KeyType::Secp256k1 => "secp256k1",
            KeyType::P224 => "P-224",
            KeyType::P256 => "P-256",
            KeyType::P384 => "P-384",
            KeyType::P521 => "P-521",
            KeyType::Rsa => "RSA",
        }
    }

    /// Signature algorithm used with keys of this type, if any is supported
    pub fn signature_algorithm(&self) -> Option<SignatureAlgorithm> {
        match self {
            KeyType::Ed25519 => Some(SignatureAlgorithm::EdDsa),
            KeyType::Secp256k1 => Some(SignatureAlgorithm::Es256k),
            KeyType::P256 => Some(SignatureAlgorithm::Es256),
            KeyType::P384 => Some(SignatureAlgorithm::Es384),
            KeyType::Rsa => Some(SignatureAlgorithm::Ps256),
            KeyType::X25519 | KeyType::P224 | KeyType::P521 => None,
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::core::crypto::registry::lookup_key_type(s)
            .ok_or_else(|| Error::UnsupportedKeyType(s.to_string()))
    }
}

/// Supported digital signature algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignatureAlgorithm {
    /// EdDSA over Ed25519
    #[serde(rename = "EdDSA")]
    EdDsa,
    /// ECDSA over secp256k1 with SHA-256
    #[serde(rename = "ES256K")]
    Es256k,
    /// ECDSA over P-256 with SHA-256
    #[serde(rename = "ES256")]
    Es256,
    /// ECDSA over P-384 with SHA-384
    #[serde(rename = "ES384")]
    Es384,
    /// RSASSA-PSS with SHA-256
    #[serde(rename = "PS256")]
    Ps256,
}

impl Default for SignatureAlgorithm {
    fn default() -> Self {
        SignatureAlgorithm::EdDsa
    }
}

impl SignatureAlgorithm {
    /// Canonical identifier of the algorithm
    pub const fn as_str(&self) -> &'static str {
        match self {
            SignatureAlgorithm::EdDsa => "EdDSA",
            SignatureAlgorithm::Es256k => "ES256K",
            SignatureAlgorithm::Es256 => "ES256",
            SignatureAlgorithm::Es384 => "ES384",
            SignatureAlgorithm::Ps256 => "PS256",
        }
    }

    /// Key type this algorithm signs with
    pub const fn key_type(&self) -> KeyType {
        match self {
            SignatureAlgorithm::EdDsa => KeyType::Ed25519,
            SignatureAlgorithm::Es256k => KeyType::Secp256k1,
            SignatureAlgorithm::Es256 => KeyType::P256,
            SignatureAlgorithm::Es384 => KeyType::P384,
            SignatureAlgorithm::Ps256 => KeyType::Rsa,
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::core::crypto::registry::lookup_signature_algorithm(s)
            .ok_or_else(|| Error::UnsupportedSignatureAlgorithm(s.to_string()))
    }
}
