/*!
Capability registry for key types and signature algorithms.

This module provides the static catalog of supported identifiers and
the mapping from each key type to its generator.
*/

pub mod manager;

// Re-export registry manager functions
pub use manager::{
    KEY_TYPE_REGISTRY,
    KeyTypeEntry,
    SIGNATURE_ALGORITHMS,
    generate_key,
    generator_for,
    get_key_generator,
    is_supported_key_type,
    is_supported_signature_algorithm,
    list_supported_key_types,
    list_supported_signature_algorithms,
    lookup_key_type,
    lookup_signature_algorithm,
    supported_key_types_json,
    supported_signature_algorithms_json,
};
