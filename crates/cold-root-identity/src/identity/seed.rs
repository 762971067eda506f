//! The root seed: 32 bytes that anchor every derived key.

use std::fmt;
use std::str::FromStr;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::random;
use crate::encoding;
use crate::error::{IdentityError, Result};
use crate::lineage::{make_lineage_event, LineageEvent};

use super::epoch::{derive_epoch_key, DerivedEpochKey};
use super::params::SEED_LEN;
use super::root::RootKeyPair;

/// A 32-byte root seed. Wiped from memory on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RootSeed([u8; SEED_LEN]);

impl RootSeed {
    /// Generate a new root seed from the OS random source.
    ///
    /// Real root seeds should be generated on an offline machine.
    pub fn generate() -> Self {
        Self(random::random_bytes())
    }

    /// Wrap raw seed bytes.
    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    /// Copy a seed out of a slice, which must be exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; SEED_LEN] = bytes
            .try_into()
            .map_err(|_| IdentityError::InvalidSeedLength {
                expected: SEED_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(bytes))
    }

    /// Parse a 64-character hex seed. Case is ignored, as is surrounding whitespace.
    pub fn from_hex(seed_hex: &str) -> Result<Self> {
        let seed_hex = seed_hex.trim();
        if !seed_hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(IdentityError::InvalidHex(
                "root seed contains non-hex characters".into(),
            ));
        }
        if seed_hex.len() != SEED_LEN * 2 {
            return Err(IdentityError::InvalidSeedLength {
                expected: SEED_LEN,
                actual: seed_hex.len() / 2,
            });
        }
        let mut bytes = [0u8; SEED_LEN];
        hex::decode_to_slice(seed_hex, &mut bytes)
            .map_err(|e| IdentityError::InvalidHex(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// Parse an `nsec1...` encoded seed.
    pub fn from_nsec(encoded: &str) -> Result<Self> {
        Ok(Self(encoding::decode_nsec(encoded.trim())?))
    }

    /// Lowercase hex of the seed. Handle the result as secret.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// `nsec1...` encoding of the seed. Handle the result as secret.
    pub fn nsec(&self) -> Result<String> {
        encoding::nsec(&self.0)
    }

    /// The raw seed bytes.
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// The root key pair; the seed is used directly as the signing seed.
    pub fn root_keypair(&self) -> RootKeyPair {
        RootKeyPair::from_seed(&self.0)
    }

    /// Derive the key for `epoch_label`.
    pub fn derive_epoch_key(&self, epoch_label: &str) -> Result<DerivedEpochKey> {
        derive_epoch_key(&self.0, epoch_label)
    }

    /// Sign a lineage event attesting `epoch_public_key_hex` under this root.
    pub fn lineage_event(
        &self,
        epoch_public_key_hex: &str,
        epoch_label: &str,
        kind: u32,
        created_at: Option<u64>,
    ) -> Result<LineageEvent> {
        make_lineage_event(&self.0, epoch_public_key_hex, epoch_label, kind, created_at)
    }

    /// Derive the epoch key and sign its lineage event in one step.
    pub fn activate_epoch(
        &self,
        epoch_label: &str,
        kind: u32,
        created_at: Option<u64>,
    ) -> Result<(DerivedEpochKey, LineageEvent)> {
        let epoch = self.derive_epoch_key(epoch_label)?;
        let event = self.lineage_event(&epoch.public_key_hex(), epoch_label, kind, created_at)?;
        Ok((epoch, event))
    }
}

impl TryFrom<&[u8]> for RootSeed {
    type Error = IdentityError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl FromStr for RootSeed {
    type Err = IdentityError;

    /// Accepts `nsec1...` or 64 hex characters.
    fn from_str(s: &str) -> Result<Self> {
        if s.trim_start().starts_with("nsec1") {
            Self::from_nsec(s)
        } else {
            Self::from_hex(s)
        }
    }
}

impl fmt::Debug for RootSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RootSeed(<redacted>)")
    }
}
