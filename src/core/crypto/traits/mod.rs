/*!
Trait definitions for cryptographic operations.
*/

pub mod keygen;

pub use keygen::KeyPairGenerator;
