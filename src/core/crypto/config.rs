/*!
Key configuration for identity clients.

A configuration pairs a key type with the signature algorithm the client
intends to sign with, so a mismatched pair is rejected before any key
material is generated.
*/

use tracing::debug;

use crate::core::crypto::registry;
use crate::core::crypto::types::algorithms::{KeyType, SignatureAlgorithm};
use crate::core::crypto::types::keys::GeneratedKeyPair;
use crate::core::error::{Error, Result};

/// Key type and signature algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CryptoConfig {
    /// Key type to generate
    pub key_type: KeyType,
    /// Signature algorithm used with the generated key
    pub signature: SignatureAlgorithm,
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            key_type: KeyType::default(),
            signature: SignatureAlgorithm::default(),
        }
    }
}

impl CryptoConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with specific settings
    pub fn with_algorithms(key_type: KeyType, signature: SignatureAlgorithm) -> Self {
        Self { key_type, signature }
    }

    /// Create a configuration from boundary identifiers
    pub fn from_names(key_type: &str, signature: &str) -> Result<Self> {
        let config = Self::with_algorithms(key_type.parse()?, signature.parse()?);
        config.validate()?;
        Ok(config)
    }

    /// Configuration for a signing key type, using its paired algorithm
    pub fn for_key_type(key_type: KeyType) -> Result<Self> {
        let signature = key_type.signature_algorithm().ok_or_else(|| {
            Error::InvalidConfig(format!("{} keys have no supported signature algorithm", key_type))
        })?;
        Ok(Self { key_type, signature })
    }

    /// secp256k1 with ES256K
    pub fn secp256k1() -> Self {
        Self::with_algorithms(KeyType::Secp256k1, SignatureAlgorithm::Es256k)
    }

    /// P-256 with ES256
    pub fn p256() -> Self {
        Self::with_algorithms(KeyType::P256, SignatureAlgorithm::Es256)
    }

    /// P-384 with ES384
    pub fn p384() -> Self {
        Self::with_algorithms(KeyType::P384, SignatureAlgorithm::Es384)
    }

    /// RSA-2048 with PS256
    pub fn rsa() -> Self {
        Self::with_algorithms(KeyType::Rsa, SignatureAlgorithm::Ps256)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.signature.key_type() != self.key_type {
            return Err(Error::InvalidConfig(format!(
                "{} signatures require {} keys, not {}",
                self.signature,
                self.signature.key_type(),
                self.key_type
            )));
        }
        Ok(())
    }

    /// Validate the configuration and generate a key pair for it
    pub fn generate_key_pair(&self) -> Result<GeneratedKeyPair> {
        self.validate()?;
        debug!(key_type = %self.key_type, signature = %self.signature, "Generating configured key pair");
        registry::generator_for(self.key_type).generate()
    }
}
