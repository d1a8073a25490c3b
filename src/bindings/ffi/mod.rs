/*!
Foreign Function Interface (FFI) module.

This module provides C-compatible bindings, allowing the registry and
generators to be called from C, Swift, Kotlin/JNI and other languages
that support C FFI.
*/

pub mod c_api;

pub use c_api::*;
