/*!
WebAssembly bindings.

This module exposes the registry and key generation to JavaScript hosts.
*/

pub mod bindings;

pub use bindings::*;
