/*!
RSA key generation.

Only 2048-bit moduli are generated, with the conventional public
exponent 65537. The modulus, private exponent and primes are exported
left-padded to fixed widths, so every record (and its JSON) has the same
size.
*/

use rand::RngCore;
use rand::rngs::OsRng;
use rsa::traits::{PrivateKeyParts, PublicKeyParts};
use rsa::{BigUint, RsaPrivateKey};
use tracing::debug;
use zeroize::Zeroizing;

use super::seeded_rng;
use crate::core::constants::RSA_KEY_BITS;
use crate::core::constants::sizes::rsa::{MODULUS_BYTES, PRIME_BYTES};
use crate::core::crypto::traits::KeyPairGenerator;
use crate::core::crypto::types::algorithms::KeyType;
use crate::core::crypto::types::keys::{GeneratedKeyPair, RsaKeyPair};
use crate::core::error::{Error, KeyGenerationCause, Result};

/// Big-endian bytes of `value`, left-padded with zeros to `width`
fn to_fixed_be(value: &BigUint, width: usize) -> Result<Vec<u8>> {
    let bytes = Zeroizing::new(value.to_bytes_be());
    if bytes.len() > width {
        return crate::keygen_err!(
            KeyType::Rsa,
            KeyGenerationCause::InvalidKeyMaterial("RSA parameter exceeds its export width")
        );
    }

    let mut out = vec![0u8; width];
    out[width - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}

/// Generate an RSA-2048 key pair
pub fn generate_rsa2048() -> Result<RsaKeyPair> {
    generate_rsa2048_with_rng(&mut OsRng)
}

/// Generate an RSA-2048 key pair, seeding the prime search from `source`
pub fn generate_rsa2048_with_rng<R: RngCore + ?Sized>(source: &mut R) -> Result<RsaKeyPair> {
    let mut rng = seeded_rng(KeyType::Rsa, source)?;
    let private_key = RsaPrivateKey::new(&mut rng, RSA_KEY_BITS)
        .map_err(|e| Error::key_generation(KeyType::Rsa, e))?;

    let prime_factors = private_key
        .primes()
        .iter()
        .map(|p| to_fixed_be(p, PRIME_BYTES))
        .collect::<Result<Vec<_>>>()?;

    debug!(key_type = %KeyType::Rsa, bits = RSA_KEY_BITS, "Generated key pair");
    Ok(RsaKeyPair {
        modulus_n: to_fixed_be(private_key.n(), MODULUS_BYTES)?,
        public_exponent_e: private_key.e().to_bytes_be(),
        private_exponent_d: to_fixed_be(private_key.d(), MODULUS_BYTES)?,
        prime_factors,
    })
}

/// RSA-2048 key pair generator
#[derive(Debug, Clone, Copy, Default)]
pub struct RsaGenerator;

impl KeyPairGenerator for RsaGenerator {
    fn key_type(&self) -> KeyType {
        KeyType::Rsa
    }

    fn generate(&self) -> Result<GeneratedKeyPair> {
        generate_rsa2048().map(GeneratedKeyPair::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::sizes::rsa::{MODULUS_BYTES, PUBLIC_EXPONENT};

    #[test]
    fn test_rsa_parameters() {
        let pair = generate_rsa2048().unwrap();
        assert_eq!(pair.modulus_n.len(), MODULUS_BYTES);
        assert_eq!(pair.prime_factors.len(), 2);
        assert_eq!(
            BigUint::from_bytes_be(&pair.public_exponent_e),
            BigUint::from_bytes_be(&PUBLIC_EXPONENT.to_be_bytes())
        );

        let product = pair
            .prime_factors
            .iter()
            .map(|p| BigUint::from_bytes_be(p))
            .fold(BigUint::from_bytes_be(&[1]), |acc, p| acc * p);
        assert_eq!(product, BigUint::from_bytes_be(&pair.modulus_n));
    }

    #[test]
    fn test_rsa_export_widths_are_fixed() {
        let mut json_lens = Vec::new();
        for _ in 0..4 {
            let pair = generate_rsa2048().unwrap();
            assert_eq!(pair.private_exponent_d.len(), MODULUS_BYTES);
            for prime in &pair.prime_factors {
                assert_eq!(prime.len(), PRIME_BYTES);
            }
            json_lens.push(GeneratedKeyPair::from(pair).to_json().unwrap().len());
        }
        assert!(json_lens.windows(2).all(|w| w[0] == w[1]), "{:?}", json_lens);
    }

    #[test]
    fn test_to_fixed_be_pads_and_rejects_oversize() {
        let value = BigUint::from_bytes_be(&[0x01, 0x02]);
        assert_eq!(to_fixed_be(&value, 4).unwrap(), vec![0, 0, 1, 2]);
        assert_eq!(
            BigUint::from_bytes_be(&to_fixed_be(&value, 4).unwrap()),
            value
        );

        match to_fixed_be(&value, 1) {
            Err(Error::KeyGeneration {
                key_type: KeyType::Rsa,
                source: KeyGenerationCause::InvalidKeyMaterial(_),
            }) => {}
            other => panic!("expected invalid key material, got {:?}", other.map(|_| ())),
        }
    }
}
