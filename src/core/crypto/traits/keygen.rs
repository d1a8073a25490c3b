/*!
Traits for key pair generation.

This module defines the interface every supported key type implements.
*/

use crate::core::crypto::types::algorithms::KeyType;
use crate::core::crypto::types::keys::GeneratedKeyPair;
use crate::core::error::Result;

/// Trait for key pair generation
///
/// Implementations hold no state; a generator may be shared freely
/// between threads and called concurrently.
pub trait KeyPairGenerator: Send + Sync {
    /// Key type this generator produces
    fn key_type(&self) -> KeyType;

    /// Generate a fresh key pair from the system CSPRNG
    fn generate(&self) -> Result<GeneratedKeyPair>;
}
