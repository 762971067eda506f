//! Ed25519 key pairs expanded from 32-byte seeds.
//!
//! The seed is the Ed25519 secret key as defined by RFC 8032; the
//! 64-byte expanded secret is `seed || public_key`. `SigningKey`
//! zeroizes its seed on drop.

use ed25519_dalek::{SigningKey, VerifyingKey, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH};
use zeroize::Zeroizing;

use crate::encoding::decode_hex_array;
use crate::error::{IdentityError, Result};

/// Length of an Ed25519 seed in bytes.
pub const SEED_LENGTH: usize = SECRET_KEY_LENGTH;

/// An Ed25519 key pair for signing operations.
pub struct Ed25519KeyPair {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

impl Ed25519KeyPair {
    /// Expand a 32-byte seed into a key pair.
    pub fn from_seed(seed: &[u8; SEED_LENGTH]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        let verifying_key = signing_key.verifying_key();
        Self {
            signing_key,
            verifying_key,
        }
    }

    /// Expand a seed given as a slice, rejecting anything but 32 bytes.
    pub fn from_seed_slice(seed: &[u8]) -> Result<Self> {
        let seed: &[u8; SEED_LENGTH] = seed
            .try_into()
            .map_err(|_| IdentityError::InvalidSeedLength {
                expected: SEED_LENGTH,
                actual: seed.len(),
            })?;
        Ok(Self::from_seed(seed))
    }

    /// Reconstruct a verifying key from raw bytes.
    pub fn verifying_key_from_bytes(bytes: &[u8]) -> Result<VerifyingKey> {
        let bytes: &[u8; PUBLIC_KEY_LENGTH] = bytes.try_into().map_err(|_| {
            IdentityError::InvalidKey(format!(
                "public key must be {PUBLIC_KEY_LENGTH} bytes, got {}",
                bytes.len()
            ))
        })?;
        VerifyingKey::from_bytes(bytes)
            .map_err(|e| IdentityError::InvalidKey(format!("invalid verifying key: {e}")))
    }

    /// Reconstruct a verifying key from hex (any case).
    pub fn verifying_key_from_hex(hex_str: &str) -> Result<VerifyingKey> {
        let bytes: [u8; PUBLIC_KEY_LENGTH] = decode_hex_array(hex_str)
            .map_err(|e| IdentityError::InvalidKey(format!("public key: {e}")))?;
        Self::verifying_key_from_bytes(&bytes)
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    /// Return the verifying (public) key.
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Return the verifying key bytes.
    pub fn verifying_key_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.verifying_key.to_bytes()
    }

    /// Return the seed bytes, wiped when the returned buffer is dropped.
    pub(crate) fn seed_bytes(&self) -> Zeroizing<[u8; SEED_LENGTH]> {
        Zeroizing::new(self.signing_key.to_bytes())
    }
}
