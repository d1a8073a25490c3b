//! Foreign language bindings.
//!
//! This module exposes the capability queries and key generation to
//! platform code: C/C++/Swift/Kotlin via FFI and JavaScript via
//! WebAssembly. Every record crosses the boundary as JSON.

// Foreign Function Interface for C-compatible callers
#[cfg(feature = "ffi")]
pub mod ffi;

// WebAssembly bindings for browser and hybrid mobile shells
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub mod wasm;

// Re-export commonly used types for convenience
#[cfg(feature = "ffi")]
pub use ffi::c_api::*;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub use wasm::bindings::*;
