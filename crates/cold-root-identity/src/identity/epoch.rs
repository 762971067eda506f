//! Epoch key derivation.
//!
//! `child_seed = HKDF-SHA256(ikm = root_seed, salt = KDF_SALT,
//! info = "epoch:" || label, L = 32)`, and the child seed is expanded
//! into an Ed25519 key pair exactly like the root seed.

use std::fmt;

use ed25519_dalek::{Signature, VerifyingKey};
use zeroize::{Zeroize, Zeroizing};

use crate::crypto::keys::Ed25519KeyPair;
use crate::crypto::{kdf, signing};
use crate::encoding;
use crate::error::Result;

use super::params::{CHILD_SEED_LEN, EPOCH_INFO_PREFIX, KDF_SALT};
use super::seed::RootSeed;

/// A key pair derived for one epoch label.
///
/// Only the 32-byte seed and the public key are exposed. The expanded
/// secret stays inside and is reachable only through [`DerivedEpochKey::sign`].
pub struct DerivedEpochKey {
    label: String,
    key_pair: Ed25519KeyPair,
}

/// The HKDF info string for `epoch_label`: `"epoch:" || UTF8(label)`.
pub fn epoch_info(epoch_label: &str) -> Vec<u8> {
    let mut info = Vec::with_capacity(EPOCH_INFO_PREFIX.len() + epoch_label.len());
    info.extend_from_slice(EPOCH_INFO_PREFIX);
    info.extend_from_slice(epoch_label.as_bytes());
    info
}

/// Deterministically derive the epoch key for `epoch_label` from a 32-byte root seed.
///
/// Fails with [`IdentityError::InvalidSeedLength`](crate::IdentityError::InvalidSeedLength)
/// unless `root_seed` is exactly 32 bytes.
pub fn derive_epoch_key(root_seed: &[u8], epoch_label: &str) -> Result<DerivedEpochKey> {
    let root_seed = RootSeed::from_slice(root_seed)?;

    let mut child_seed: [u8; CHILD_SEED_LEN] =
        kdf::derive_array(root_seed.as_bytes(), KDF_SALT, &epoch_info(epoch_label))?;
    let key_pair = Ed25519KeyPair::from_seed(&child_seed);
    child_seed.zeroize();

    let key = DerivedEpochKey {
        label: epoch_label.to_string(),
        key_pair,
    };
    log::debug!(
        "derived epoch key label={:?} pubkey={}",
        key.label,
        key.public_key_hex()
    );
    Ok(key)
}

impl DerivedEpochKey {
    /// The epoch label this key was derived for.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The 32-byte child seed, wiped when the returned buffer is dropped.
    pub fn seed(&self) -> Zeroizing<[u8; CHILD_SEED_LEN]> {
        self.key_pair.seed_bytes()
    }

    /// Lowercase hex of the child seed. Handle the result as secret.
    pub fn seed_hex(&self) -> String {
        hex::encode(*self.seed())
    }

    /// `nsec1...` of the child seed. Handle the result as secret.
    pub fn nsec(&self) -> Result<String> {
        encoding::nsec(&self.seed())
    }

    /// The epoch verifying key.
    pub fn public_key(&self) -> &VerifyingKey {
        self.key_pair.verifying_key()
    }

    /// The epoch public key bytes.
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.key_pair.verifying_key_bytes()
    }

    /// Lowercase hex of the epoch public key.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key_bytes())
    }

    /// `npub1...` of the epoch public key.
    pub fn npub(&self) -> Result<String> {
        encoding::npub(&self.public_key_bytes())
    }

    /// Produce a detached signature over `message` with the epoch key.
    pub fn sign(&self, message: &[u8]) -> Signature {
        signing::sign(self.key_pair.signing_key(), message)
    }
}

impl fmt::Debug for DerivedEpochKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedEpochKey")
            .field("label", &self.label)
            .field("public_key", &self.public_key_hex())
            .finish_non_exhaustive()
    }
}
