/*!
Key pair generation for every supported key type.

Each module wraps one external primitive and reshapes its output into a
boundary record. Every generator also has a `*_with_rng` form taking the
entropy source explicitly; the plain form draws from the OS.
*/

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::core::crypto::types::algorithms::KeyType;
use crate::core::error::{Error, Result};

pub mod curve25519;
pub mod ecdsa;
pub mod rsa_key;

pub use curve25519::{
    Ed25519Generator, X25519Generator, generate_ed25519, generate_ed25519_with_rng,
    generate_x25519, generate_x25519_with_rng,
};
pub use ecdsa::{EcCurve, EcdsaGenerator};
pub use rsa_key::{RsaGenerator, generate_rsa2048, generate_rsa2048_with_rng};

/// Seed a per-call CSPRNG from `source`.
///
/// The curve and RSA primitives only call the infallible `fill_bytes`,
/// which panics on an OS entropy failure. Seeding through `try_fill_bytes`
/// first turns that failure into a generation error.
pub(crate) fn seeded_rng<R: RngCore + ?Sized>(key_type: KeyType, source: &mut R) -> Result<StdRng> {
    StdRng::from_rng(source).map_err(|e| Error::key_generation(key_type, e))
}

#[cfg(test)]
pub(crate) mod testing {
    use rand::RngCore;

    /// Entropy source that is always unavailable
    pub struct FailingRng;

    impl RngCore for FailingRng {
        fn next_u32(&mut self) -> u32 {
            panic!("FailingRng has no entropy")
        }

        fn next_u64(&mut self) -> u64 {
            panic!("FailingRng has no entropy")
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            panic!("FailingRng has no entropy")
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy source unavailable"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FailingRng;
    use super::*;
    use crate::core::error::KeyGenerationCause;

    fn assert_entropy_failure<T>(result: Result<T>, expected: KeyType) {
        match result {
            Err(Error::KeyGeneration {
                key_type,
                source: KeyGenerationCause::Entropy(_),
            }) => assert_eq!(key_type, expected),
            Err(other) => panic!("expected entropy failure for {}, got {}", expected, other),
            Ok(_) => panic!("expected entropy failure for {}, got a key pair", expected),
        }
    }

    #[test]
    fn test_seeded_rng_reports_entropy_failure() {
        assert_entropy_failure(seeded_rng(KeyType::P256, &mut FailingRng), KeyType::P256);
        assert!(seeded_rng(KeyType::P256, &mut rand::rngs::OsRng).is_ok());
    }

    #[test]
    fn test_entropy_failure_surfaces_for_every_key_type() {
        assert_entropy_failure(generate_ed25519_with_rng(&mut FailingRng), KeyType::Ed25519);
        assert_entropy_failure(generate_x25519_with_rng(&mut FailingRng), KeyType::X25519);

        for curve in [
            EcCurve::Secp256k1,
            EcCurve::P224,
            EcCurve::P256,
            EcCurve::P384,
            EcCurve::P521,
        ] {
            assert_entropy_failure(curve.generate_with_rng(&mut FailingRng), curve.key_type());
        }

        assert_entropy_failure(generate_rsa2048_with_rng(&mut FailingRng), KeyType::Rsa);
    }
}
