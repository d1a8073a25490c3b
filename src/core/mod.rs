//! Core components.
//!
//! This module contains the capability registry, key generation,
//! constants and error handling.

// Export cryptographic functionality
pub mod crypto;

// Key size constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::error::{Error, KeyGenerationCause, Result};
pub use self::constants::RSA_KEY_BITS;
