/*!
Error handling for key generation and capability queries.

Capability predicates never fail; only key generation, string dispatch,
configuration validation and JSON serialization produce errors.
*/

use thiserror::Error;

use crate::core::crypto::types::algorithms::KeyType;

/// Result type for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for this crate
#[derive(Error, Debug)]
pub enum Error {
    /// The key generation primitive failed; no key material is returned
    #[error("Failed to generate {key_type} key pair: {source}")]
    KeyGeneration {
        key_type: KeyType,
        #[source]
        source: KeyGenerationCause,
    },

    /// Identifier does not name a supported key type
    #[error("Unsupported key type: {0}")]
    UnsupportedKeyType(String),

    /// Identifier does not name a supported signature algorithm
    #[error("Unsupported signature algorithm: {0}")]
    UnsupportedSignatureAlgorithm(String),

    /// Configuration is internally inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Boundary serialization failed
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Underlying failure reported by a key generation primitive
#[derive(Error, Debug)]
pub enum KeyGenerationCause {
    /// The system random source could not supply entropy
    #[error("entropy source failure: {0}")]
    Entropy(#[from] rand::Error),

    /// RSA key generation failed
    #[error("RSA primitive failure: {0}")]
    Rsa(#[from] rsa::Error),

    /// The primitive returned key material that cannot be exported
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(&'static str),
}

impl Error {
    /// Wrap a primitive failure for the given key type
    pub fn key_generation(key_type: KeyType, cause: impl Into<KeyGenerationCause>) -> Self {
        Error::KeyGeneration {
            key_type,
            source: cause.into(),
        }
    }

    /// Key type whose generation failed, if this is a generation error
    pub fn key_type(&self) -> Option<KeyType> {
        match self {
            Error::KeyGeneration { key_type, .. } => Some(*key_type),
            _ => None,
        }
    }
}

/// Create a key generation error for a key type
#[macro_export]
macro_rules! keygen_err {
    ($key_type:expr, $cause:expr) => {
        Err($crate::core::error::Error::key_generation($key_type, $cause))
    };
}
