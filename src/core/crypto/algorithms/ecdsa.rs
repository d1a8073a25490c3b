/*!
ECDSA-family key generation over short Weierstrass curves.

One generic routine serves every curve through the `elliptic-curve`
traits; the concrete curve crates only supply the arithmetic.
*/

use elliptic_curve::sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{AffinePoint, CurveArithmetic, FieldBytesSize, SecretKey};
use rand::RngCore;
use rand::rngs::{OsRng, StdRng};
use tracing::debug;

use super::seeded_rng;
use crate::core::constants::sizes::field;
use crate::core::crypto::traits::KeyPairGenerator;
use crate::core::crypto::types::algorithms::KeyType;
use crate::core::crypto::types::keys::{EllipticCurveKeyPair, GeneratedKeyPair};
use crate::core::error::{KeyGenerationCause, Result};

/// Weierstrass curves supported for ECDSA-family keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcCurve {
    Secp256k1,
    P224,
    P256,
    P384,
    P521,
}

impl EcCurve {
    /// Key type identifying this curve
    pub const fn key_type(&self) -> KeyType {
        match self {
            EcCurve::Secp256k1 => KeyType::Secp256k1,
            EcCurve::P224 => KeyType::P224,
            EcCurve::P256 => KeyType::P256,
            EcCurve::P384 => KeyType::P384,
            EcCurve::P521 => KeyType::P521,
        }
    }

    /// Width of a field element (coordinate or scalar) in bytes
    pub const fn field_size(&self) -> usize {
        match self {
            EcCurve::Secp256k1 => field::SECP256K1_BYTES,
            EcCurve::P224 => field::P224_BYTES,
            EcCurve::P256 => field::P256_BYTES,
            EcCurve::P384 => field::P384_BYTES,
            EcCurve::P521 => field::P521_BYTES,
        }
    }

    /// Generate a key pair on this curve
    pub fn generate(&self) -> Result<EllipticCurveKeyPair> {
        self.generate_with_rng(&mut OsRng)
    }

    /// Generate a key pair on this curve, seeding the scalar draw from `source`
    pub fn generate_with_rng<R: RngCore + ?Sized>(&self, source: &mut R) -> Result<EllipticCurveKeyPair> {
        let key_type = self.key_type();
        let mut rng = seeded_rng(key_type, source)?;
        let pair = match self {
            EcCurve::Secp256k1 => generate_on_curve::<k256::Secp256k1>(key_type, &mut rng)?,
            EcCurve::P224 => generate_on_curve::<p224::NistP224>(key_type, &mut rng)?,
            EcCurve::P256 => generate_on_curve::<p256::NistP256>(key_type, &mut rng)?,
            EcCurve::P384 => generate_on_curve::<p384::NistP384>(key_type, &mut rng)?,
            EcCurve::P521 => generate_on_curve::<p521::NistP521>(key_type, &mut rng)?,
        };
        debug!(key_type = %self.key_type(), "Generated key pair");
        Ok(pair)
    }
}

/// Draw a secret scalar on curve `C` and export the point and scalar as
/// fixed-width big-endian field elements.
fn generate_on_curve<C>(key_type: KeyType, rng: &mut StdRng) -> Result<EllipticCurveKeyPair>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let secret = SecretKey::<C>::random(rng);
    let point = secret.public_key().to_encoded_point(false);

    let (x, y) = match (point.x(), point.y()) {
        (Some(x), Some(y)) => (x.to_vec(), y.to_vec()),
        _ => {
            return crate::keygen_err!(
                key_type,
                KeyGenerationCause::InvalidKeyMaterial("public key has no affine coordinates")
            );
        }
    };

    Ok(EllipticCurveKeyPair {
        private_x: x.clone(),
        private_y: y.clone(),
        public_x: x,
        public_y: y,
        private_scalar: secret.to_bytes().to_vec(),
    })
}

/// ECDSA-family key pair generator for one curve
#[derive(Debug, Clone, Copy)]
pub struct EcdsaGenerator {
    pub curve: EcCurve,
}

impl EcdsaGenerator {
    pub const fn new(curve: EcCurve) -> Self {
        Self { curve }
    }
}

impl KeyPairGenerator for EcdsaGenerator {
    fn key_type(&self) -> KeyType {
        self.curve.key_type()
    }

    fn generate(&self) -> Result<GeneratedKeyPair> {
        self.curve.generate().map(GeneratedKeyPair::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CURVES: [EcCurve; 5] = [
        EcCurve::Secp256k1,
        EcCurve::P224,
        EcCurve::P256,
        EcCurve::P384,
        EcCurve::P521,
    ];

    #[test]
    fn test_fields_are_fixed_width() {
        for curve in ALL_CURVES {
            let pair = curve.generate().unwrap();
            let width = curve.field_size();
            assert_eq!(pair.public_x.len(), width, "{:?} x", curve);
            assert_eq!(pair.public_y.len(), width, "{:?} y", curve);
            assert_eq!(pair.private_scalar.len(), width, "{:?} d", curve);
        }
    }

    #[test]
    fn test_private_point_matches_public_point() {
        for curve in ALL_CURVES {
            let pair = curve.generate().unwrap();
            assert_eq!(pair.private_x, pair.public_x);
            assert_eq!(pair.private_y, pair.public_y);
        }
    }

    #[test]
    fn test_p256_scalar_reproduces_point() {
        let pair = EcCurve::P256.generate().unwrap();
        let secret = p256::SecretKey::from_slice(&pair.private_scalar).unwrap();
        let public = p256::PublicKey::from_sec1_bytes(&pair.public_point_sec1()).unwrap();
        assert_eq!(secret.public_key(), public);
    }

    #[test]
    fn test_p521_scalar_reproduces_point() {
        let pair = EcCurve::P521.generate().unwrap();
        let secret = p521::SecretKey::from_slice(&pair.private_scalar).unwrap();
        let public = p521::PublicKey::from_sec1_bytes(&pair.public_point_sec1()).unwrap();
        assert_eq!(secret.public_key(), public);
    }

    #[test]
    fn test_generator_key_types() {
        for curve in ALL_CURVES {
            assert_eq!(EcdsaGenerator::new(curve).key_type(), curve.key_type());
        }
    }
}
