/*!
Boundary records for generated key pairs.

Every record is plain data: byte strings only, no native key objects,
so it can be handed across a language boundary as JSON or copied into
caller-owned buffers. Large integers are carried as big-endian byte
strings and never narrowed to machine words.
*/

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::encoding::{hex_bytes, hex_bytes_seq};
use crate::core::error::Result;

/// Key pair whose natural representation is opaque byte strings
/// (Ed25519, X25519).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct RawKeyPair {
    #[serde(with = "hex_bytes")]
    pub private_key: Vec<u8>,
    #[serde(with = "hex_bytes")]
    pub public_key: Vec<u8>,
}

/// Point-plus-scalar key pair on a Weierstrass curve.
///
/// Coordinates and scalar are fixed-width big-endian field elements.
/// The private point is the scalar times the base point, which is the
/// public point.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct EllipticCurveKeyPair {
    #[serde(with = "hex_bytes")]
    pub public_x: Vec<u8>,
    #[serde(with = "hex_bytes")]
    pub public_y: Vec<u8>,
    #[serde(with = "hex_bytes")]
    pub private_x: Vec<u8>,
    #[serde(with = "hex_bytes")]
    pub private_y: Vec<u8>,
    #[serde(with = "hex_bytes")]
    pub private_scalar: Vec<u8>,
}

impl EllipticCurveKeyPair {
    /// Uncompressed SEC1 encoding of the public point (`04 || x || y`)
    pub fn public_point_sec1(&self) -> Vec<u8> {
        let mut encoded = Vec::with_capacity(1 + self.public_x.len() + self.public_y.len());
        encoded.push(0x04);
        encoded.extend_from_slice(&self.public_x);
        encoded.extend_from_slice(&self.public_y);
        encoded
    }
}

/// RSA key parameters as big-endian byte strings.
///
/// `modulus_n` and `private_exponent_d` are padded to the modulus width
/// and each prime to half of it; `public_exponent_e` is minimal.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct RsaKeyPair {
    #[serde(with = "hex_bytes")]
    pub modulus_n: Vec<u8>,
    #[serde(with = "hex_bytes")]
    pub public_exponent_e: Vec<u8>,
    #[serde(with = "hex_bytes")]
    pub private_exponent_d: Vec<u8>,
    #[serde(with = "hex_bytes_seq")]
    pub prime_factors: Vec<Vec<u8>>,
}

/// Result of a generation call, in one of the three boundary shapes
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "camelCase")]
pub enum GeneratedKeyPair {
    Raw(RawKeyPair),
    EllipticCurve(EllipticCurveKeyPair),
    Rsa(RsaKeyPair),
}

impl GeneratedKeyPair {
    /// Name of the record shape, matching the serialized tag
    pub fn shape(&self) -> &'static str {
        match self {
            GeneratedKeyPair::Raw(_) => "raw",
            GeneratedKeyPair::EllipticCurve(_) => "ellipticCurve",
            GeneratedKeyPair::Rsa(_) => "rsa",
        }
    }

    pub fn as_raw(&self) -> Option<&RawKeyPair> {
        match self {
            GeneratedKeyPair::Raw(pair) => Some(pair),
            _ => None,
        }
    }

    pub fn as_elliptic_curve(&self) -> Option<&EllipticCurveKeyPair> {
        match self {
            GeneratedKeyPair::EllipticCurve(pair) => Some(pair),
            _ => None,
        }
    }

    pub fn as_rsa(&self) -> Option<&RsaKeyPair> {
        match self {
            GeneratedKeyPair::Rsa(pair) => Some(pair),
            _ => None,
        }
    }

    /// Serialize the record to JSON bytes for the boundary
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

impl From<RawKeyPair> for GeneratedKeyPair {
    fn from(pair: RawKeyPair) -> Self {
        GeneratedKeyPair::Raw(pair)
    }
}

impl From<EllipticCurveKeyPair> for GeneratedKeyPair {
    fn from(pair: EllipticCurveKeyPair) -> Self {
        GeneratedKeyPair::EllipticCurve(pair)
    }
}

impl From<RsaKeyPair> for GeneratedKeyPair {
    fn from(pair: RsaKeyPair) -> Self {
        GeneratedKeyPair::Rsa(pair)
    }
}

// Private material never reaches Debug output.

impl fmt::Debug for RawKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawKeyPair")
            .field("private_key", &"<redacted>")
            .field("public_key", &hex::encode(&self.public_key))
            .finish()
    }
}

impl fmt::Debug for EllipticCurveKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EllipticCurveKeyPair")
            .field("public_x", &hex::encode(&self.public_x))
            .field("public_y", &hex::encode(&self.public_y))
            .field("private_scalar", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for RsaKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaKeyPair")
            .field("modulus_n", &hex::encode(&self.modulus_n))
            .field("public_exponent_e", &hex::encode(&self.public_exponent_e))
            .field("private_exponent_d", &"<redacted>")
            .field("prime_factors", &format_args!("<{} redacted>", self.prime_factors.len()))
            .finish()
    }
}

impl fmt::Debug for GeneratedKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratedKeyPair::Raw(pair) => fmt::Debug::fmt(pair, f),
            GeneratedKeyPair::EllipticCurve(pair) => fmt::Debug::fmt(pair, f),
            GeneratedKeyPair::Rsa(pair) => fmt::Debug::fmt(pair, f),
        }
    }
}
