//! The root key pair.

use std::fmt;

use ed25519_dalek::{Signature, VerifyingKey};

use crate::crypto::keys::Ed25519KeyPair;
use crate::crypto::signing;
use crate::encoding;
use crate::error::Result;

use super::params::SEED_LEN;

/// Ed25519 key pair whose signing seed is the root seed itself.
///
/// The secret half never leaves this type; it can only be used to sign.
pub struct RootKeyPair {
    key_pair: Ed25519KeyPair,
}

/// Expand a root seed directly into the root key pair. No KDF step is applied.
///
/// Fails with [`IdentityError::InvalidSeedLength`](crate::IdentityError::InvalidSeedLength)
/// unless `root_seed` is exactly 32 bytes.
pub fn root_keypair_from_seed(root_seed: &[u8]) -> Result<RootKeyPair> {
    Ok(RootKeyPair {
        key_pair: Ed25519KeyPair::from_seed_slice(root_seed)?,
    })
}

impl RootKeyPair {
    pub(crate) fn from_seed(seed: &[u8; SEED_LEN]) -> Self {
        Self {
            key_pair: Ed25519KeyPair::from_seed(seed),
        }
    }

    /// The root verifying key.
    pub fn public_key(&self) -> &VerifyingKey {
        self.key_pair.verifying_key()
    }

    /// The root public key bytes.
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.key_pair.verifying_key_bytes()
    }

    /// Lowercase hex of the root public key.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key_bytes())
    }

    /// `npub1...` of the root public key.
    pub fn npub(&self) -> Result<String> {
        encoding::npub(&self.public_key_bytes())
    }

    /// Produce a detached signature over `message`.
    pub fn sign(&self, message: &[u8]) -> Signature {
        signing::sign(self.key_pair.signing_key(), message)
    }
}

impl fmt::Debug for RootKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootKeyPair")
            .field("public_key", &self.public_key_hex())
            .finish_non_exhaustive()
    }
}
