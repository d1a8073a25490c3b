/*!
Constants for key generation.

This module contains the fixed key sizes produced by each supported
key type.
*/

/// Size constants for generated key material
pub mod sizes {
    /// Ed25519 constants
    pub mod ed25519 {
        /// Size of the Ed25519 private key (seed || public key) in bytes
        pub const PRIVATE_KEY_BYTES: usize = 64;

        /// Size of the Ed25519 seed in bytes
        pub const SEED_BYTES: usize = 32;

        /// Size of the Ed25519 public key in bytes
        pub const PUBLIC_KEY_BYTES: usize = 32;
    }

    /// X25519 constants
    pub mod x25519 {
        /// Size of the X25519 private key in bytes
        pub const PRIVATE_KEY_BYTES: usize = 32;

        /// Size of the X25519 public key in bytes
        pub const PUBLIC_KEY_BYTES: usize = 32;
    }

    /// Field element sizes of the Weierstrass curves, in bytes
    pub mod field {
        pub const SECP256K1_BYTES: usize = 32;
        pub const P224_BYTES: usize = 28;
        pub const P256_BYTES: usize = 32;
        pub const P384_BYTES: usize = 48;
        /// 521 bits rounded up to whole bytes
        pub const P521_BYTES: usize = 66;
    }

    /// RSA constants
    pub mod rsa {
        /// Modulus size of generated RSA keys in bits
        pub const KEY_BITS: usize = 2048;

        /// Modulus size of generated RSA keys in bytes
        pub const MODULUS_BYTES: usize = KEY_BITS / 8;

        /// Export width of each of the two prime factors in bytes
        pub const PRIME_BYTES: usize = MODULUS_BYTES / 2;

        /// Public exponent used for generated RSA keys
        pub const PUBLIC_EXPONENT: u32 = 65537;
    }
}

/// Modulus size of generated RSA keys in bits
pub const RSA_KEY_BITS: usize = sizes::rsa::KEY_BITS;
