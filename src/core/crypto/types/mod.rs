/*!
Core types for key generation.

This module provides the identifier enums, the boundary records and the
serialization helpers they use.
*/

pub mod algorithms;
pub mod encoding;
pub mod keys;

// Re-export core types for easier access
pub use algorithms::{KeyType, SignatureAlgorithm};
pub use keys::{EllipticCurveKeyPair, GeneratedKeyPair, RawKeyPair, RsaKeyPair};
