/*!
Ed25519 and X25519 key generation.

Both key types are exported as raw byte strings. Seeds are drawn with the
fallible `try_fill_bytes` so that an unavailable entropy source is
reported instead of aborting the process.
*/

use ed25519_dalek::SigningKey;
use rand::RngCore;
use rand::rngs::OsRng;
use tracing::debug;
use x25519_dalek::{PublicKey as X25519PublicKey, StaticSecret};
use zeroize::Zeroizing;

use crate::core::constants::sizes::{ed25519, x25519};
use crate::core::crypto::traits::KeyPairGenerator;
use crate::core::crypto::types::algorithms::KeyType;
use crate::core::crypto::types::keys::{GeneratedKeyPair, RawKeyPair};
use crate::core::error::{Error, Result};

fn draw_seed<const N: usize, R: RngCore + ?Sized>(
    key_type: KeyType,
    rng: &mut R,
) -> Result<Zeroizing<[u8; N]>> {
    let mut seed = Zeroizing::new([0u8; N]);
    rng.try_fill_bytes(seed.as_mut_slice())
        .map_err(|e| Error::key_generation(key_type, e))?;
    Ok(seed)
}

/// Generate an Ed25519 key pair.
///
/// The private key is the 64-byte keypair encoding (seed followed by the
/// public key); the public key is the 32-byte compressed point.
pub fn generate_ed25519() -> Result<RawKeyPair> {
    generate_ed25519_with_rng(&mut OsRng)
}

/// Generate an Ed25519 key pair with the seed drawn from `rng`
pub fn generate_ed25519_with_rng<R: RngCore + ?Sized>(rng: &mut R) -> Result<RawKeyPair> {
    let seed = draw_seed::<{ ed25519::SEED_BYTES }, R>(KeyType::Ed25519, rng)?;
    let signing_key = SigningKey::from_bytes(&seed);
    let keypair_bytes = Zeroizing::new(signing_key.to_keypair_bytes());

    debug!(key_type = %KeyType::Ed25519, "Generated key pair");
    Ok(RawKeyPair {
        private_key: keypair_bytes.to_vec(),
        public_key: signing_key.verifying_key().to_bytes().to_vec(),
    })
}

/// Generate an X25519 key pair (32-byte private scalar, 32-byte public key)
pub fn generate_x25519() -> Result<RawKeyPair> {
    generate_x25519_with_rng(&mut OsRng)
}

pub fn generate_x25519_with_rng<R: RngCore + ?Sized>(rng: &mut R) -> Result<RawKeyPair> {
    let seed = draw_seed::<{ x25519::PRIVATE_KEY_BYTES }, R>(KeyType::X25519, rng)?;
    let secret = StaticSecret::from(*seed);
    let public = X25519PublicKey::from(&secret);

    debug!(key_type = %KeyType::X25519, "Generated key pair");
    Ok(RawKeyPair {
        private_key: secret.to_bytes().to_vec(),
        public_key: public.to_bytes().to_vec(),
    })
}

/// Ed25519 key pair generator
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Generator;

impl KeyPairGenerator for Ed25519Generator {
    fn key_type(&self) -> KeyType {
        KeyType::Ed25519
    }

    fn generate(&self) -> Result<GeneratedKeyPair> {
        generate_ed25519().map(GeneratedKeyPair::from)
    }
}

/// X25519 key pair generator
#[derive(Debug, Clone, Copy, Default)]
pub struct X25519Generator;

impl KeyPairGenerator for X25519Generator {
    fn key_type(&self) -> KeyType {
        KeyType::X25519
    }

    fn generate(&self) -> Result<GeneratedKeyPair> {
        generate_x25519().map(GeneratedKeyPair::from)
    }
}
