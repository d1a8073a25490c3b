/*!
WebAssembly bindings for capability queries and key generation.
*/

use js_sys::{Array, Error as JsError, JSON};
use wasm_bindgen::prelude::*;
use zeroize::Zeroizing;

use crate::api;
use crate::core::crypto::registry;
use crate::core::error::Error;

fn to_js_error(err: Error) -> JsValue {
    JsError::new(&err.to_string()).into()
}

fn to_js_array(names: Vec<String>) -> Array {
    names.iter().map(|name| JsValue::from_str(name)).collect()
}

/// Install the panic hook so panics surface as console errors
#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
}

/// Supported key types, in declaration order
#[wasm_bindgen(js_name = supportedKeyTypes)]
pub fn wasm_supported_key_types() -> Array {
    to_js_array(registry::list_supported_key_types())
}

#[wasm_bindgen(js_name = isSupportedKeyType)]
pub fn wasm_is_supported_key_type(key_type: &str) -> bool {
    api::is_supported_key_type(key_type)
}

/// Supported signature algorithms, in declaration order
#[wasm_bindgen(js_name = supportedSignatureAlgorithms)]
pub fn wasm_supported_signature_algorithms() -> Array {
    to_js_array(registry::list_supported_signature_algorithms())
}

#[wasm_bindgen(js_name = isSupportedSignatureAlgorithm)]
pub fn wasm_is_supported_signature_algorithm(algorithm: &str) -> bool {
    api::is_supported_signature_algorithm(algorithm)
}

/// Generate a key pair for a key type identifier.
///
/// Returns the record as a plain object with a `shape` tag and
/// hex-encoded byte fields.
#[wasm_bindgen(js_name = generateKey)]
pub fn wasm_generate_key(key_type: &str) -> Result<JsValue, JsValue> {
    let pair = api::generate_key(key_type).map_err(to_js_error)?;
    let json = Zeroizing::new(
        serde_json::to_string(&pair).map_err(|e| to_js_error(Error::from(e)))?,
    );
    JSON::parse(&json)
}
