/*!
C API for capability queries and key generation.

Strings are NUL-terminated UTF-8. Results are written as JSON into a
caller-provided buffer using an in/out length: on entry `*out_len` holds
the buffer capacity, on return it holds the number of bytes written, or
the required size when the buffer is too small.
*/

use libc::{c_char, c_int, c_uint};
use std::ffi::CStr;
use std::ptr;
use zeroize::Zeroizing;

use crate::api;
use crate::core::error::{Error, Result};

// Error codes for the C API
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SsiErrorCode {
    Success = 0,
    InvalidArgument = -1,
    UnsupportedKeyType = -2,
    KeyGenerationError = -3,
    SerializationError = -4,
    BufferTooSmall = -5,
}

impl From<&Error> for SsiErrorCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::KeyGeneration { .. } => SsiErrorCode::KeyGenerationError,
            Error::UnsupportedKeyType(_) => SsiErrorCode::UnsupportedKeyType,
            Error::UnsupportedSignatureAlgorithm(_) => SsiErrorCode::InvalidArgument,
            Error::InvalidConfig(_) => SsiErrorCode::InvalidArgument,
            Error::Serialization(_) => SsiErrorCode::SerializationError,
        }
    }
}

/// Borrow a C string argument as UTF-8
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives `'a`.
unsafe fn str_arg<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

/// Copy `bytes` into the caller's buffer
///
/// # Safety
/// `out` must be valid for `*out_len` bytes of writes and `out_len` valid
/// for reads and writes.
unsafe fn write_out(bytes: &[u8], out: *mut u8, out_len: *mut c_uint) -> c_int {
    let max_len = unsafe { *out_len };

    if bytes.len() > max_len as usize {
        unsafe { *out_len = bytes.len() as c_uint };
        return SsiErrorCode::BufferTooSmall as c_int;
    }

    unsafe {
        *out_len = bytes.len() as c_uint;
        ptr::copy_nonoverlapping(bytes.as_ptr(), out, bytes.len());
    }

    SsiErrorCode::Success as c_int
}

/// Write a JSON result or translate its error into a code
///
/// # Safety
/// Same contract as [`write_out`].
unsafe fn write_result(result: Result<Vec<u8>>, out: *mut u8, out_len: *mut c_uint) -> c_int {
    match result {
        Ok(json) => {
            let json = Zeroizing::new(json);
            unsafe { write_out(&json, out, out_len) }
        }
        Err(err) => SsiErrorCode::from(&err) as c_int,
    }
}

/// Write the supported key types as a JSON array of strings
///
/// @param out_json Buffer to receive the JSON
/// @param out_json_len Pointer to the buffer capacity (in) and written length (out)
/// @return 0 on success, negative error code on failure
///
/// # Safety
/// `out_json` must be valid for `*out_json_len` bytes of writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ssi_get_supported_key_types(
    out_json: *mut u8,
    out_json_len: *mut c_uint,
) -> c_int {
    if out_json.is_null() || out_json_len.is_null() {
        return SsiErrorCode::InvalidArgument as c_int;
    }
    unsafe { write_result(api::get_supported_key_types(), out_json, out_json_len) }
}

/// Check whether a string names a supported key type
///
/// @return 1 if supported, 0 otherwise (including NULL or invalid UTF-8)
///
/// # Safety
/// `key_type` must be null or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ssi_is_supported_key_type(key_type: *const c_char) -> c_int {
    unsafe { str_arg(key_type) }.is_some_and(api::is_supported_key_type) as c_int
}

/// Write the supported signature algorithms as a JSON array of strings
///
/// @param out_json Buffer to receive the JSON
/// @param out_json_len Pointer to the buffer capacity (in) and written length (out)
/// @return 0 on success, negative error code on failure
///
/// # Safety
/// `out_json` must be valid for `*out_json_len` bytes of writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ssi_get_supported_signature_algorithms(
    out_json: *mut u8,
    out_json_len: *mut c_uint,
) -> c_int {
    if out_json.is_null() || out_json_len.is_null() {
        return SsiErrorCode::InvalidArgument as c_int;
    }
    unsafe { write_result(api::get_supported_signature_algorithms(), out_json, out_json_len) }
}

/// Check whether a string names a supported signature algorithm
///
/// @return 1 if supported, 0 otherwise (including NULL or invalid UTF-8)
///
/// # Safety
/// `algorithm` must be null or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ssi_is_supported_signature_algorithm(algorithm: *const c_char) -> c_int {
    unsafe { str_arg(algorithm) }.is_some_and(api::is_supported_signature_algorithm) as c_int
}

/// Generate a key pair and write it as a JSON record
///
/// Every call draws fresh key material. If the buffer is too small the
/// generated key is discarded, the required length is reported and the
/// caller must call again with a larger buffer (getting a new key).
///
/// @param key_type Key type identifier, e.g. "Ed25519" or "P-256"
/// @param out_json Buffer to receive the JSON record
/// @param out_json_len Pointer to the buffer capacity (in) and written length (out)
/// @return 0 on success, negative error code on failure
///
/// # Safety
/// `key_type` must be a NUL-terminated string and `out_json` must be valid
/// for `*out_json_len` bytes of writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ssi_generate_key(
    key_type: *const c_char,
    out_json: *mut u8,
    out_json_len: *mut c_uint,
) -> c_int {
    if out_json.is_null() || out_json_len.is_null() {
        return SsiErrorCode::InvalidArgument as c_int;
    }
    let Some(key_type) = (unsafe { str_arg(key_type) }) else {
        return SsiErrorCode::InvalidArgument as c_int;
    };

    unsafe { write_result(api::generate_key_json(key_type), out_json, out_json_len) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn call_with_buffer(
        capacity: usize,
        f: impl FnOnce(*mut u8, *mut c_uint) -> c_int,
    ) -> (c_int, Vec<u8>) {
        let mut buf = vec![0u8; capacity];
        let mut len = capacity as c_uint;
        let code = f(buf.as_mut_ptr(), &mut len);
        buf.truncate(len as usize);
        (code, buf)
    }

    #[test]
    fn test_supported_key_types_json() {
        let (code, json) = call_with_buffer(256, |out, len| unsafe {
            ssi_get_supported_key_types(out, len)
        });
        assert_eq!(code, SsiErrorCode::Success as c_int);
        let names: Vec<String> = serde_json::from_slice(&json).unwrap();
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn test_buffer_too_small_reports_required_length() {
        let mut buf = [0u8; 4];
        let mut len = buf.len() as c_uint;
        let code = unsafe { ssi_get_supported_signature_algorithms(buf.as_mut_ptr(), &mut len) };

        assert_eq!(code, SsiErrorCode::BufferTooSmall as c_int);
        assert_eq!(len as usize, br#"["EdDSA","ES256K","ES256","ES384","PS256"]"#.len());
        assert_eq!(buf, [0u8; 4]);
    }

    #[test]
    fn test_predicates() {
        let ed = CString::new("Ed25519").unwrap();
        let lower = CString::new("ed25519").unwrap();
        let es = CString::new("ES256K").unwrap();
        unsafe {
            assert_eq!(ssi_is_supported_key_type(ed.as_ptr()), 1);
            assert_eq!(ssi_is_supported_key_type(lower.as_ptr()), 0);
            assert_eq!(ssi_is_supported_key_type(ptr::null()), 0);
            assert_eq!(ssi_is_supported_signature_algorithm(es.as_ptr()), 1);
        }
    }

    #[test]
    fn test_generate_key() {
        let name = CString::new("secp256k1").unwrap();
        let (code, json) = call_with_buffer(1024, |out, len| unsafe {
            ssi_generate_key(name.as_ptr(), out, len)
        });
        assert_eq!(code, SsiErrorCode::Success as c_int);
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["shape"], "ellipticCurve");

        let unknown = CString::new("bn254").unwrap();
        let (code, _) = call_with_buffer(1024, |out, len| unsafe {
            ssi_generate_key(unknown.as_ptr(), out, len)
        });
        assert_eq!(code, SsiErrorCode::UnsupportedKeyType as c_int);
    }

    #[test]
    fn test_rsa_retry_with_reported_length_succeeds() {
        let name = CString::new("RSA").unwrap();
        let mut small = [0u8; 16];
        let mut required = small.len() as c_uint;
        let code = unsafe { ssi_generate_key(name.as_ptr(), small.as_mut_ptr(), &mut required) };
        assert_eq!(code, SsiErrorCode::BufferTooSmall as c_int);

        // Each retry draws a new key; the reported size must still fit it
        for _ in 0..3 {
            let (code, json) = call_with_buffer(required as usize, |out, len| unsafe {
                ssi_generate_key(name.as_ptr(), out, len)
            });
            assert_eq!(code, SsiErrorCode::Success as c_int);
            assert_eq!(json.len(), required as usize);
        }
    }
}
