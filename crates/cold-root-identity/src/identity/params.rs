//! Protocol constants.
//!
//! Changing any of these produces keys that do not interoperate with
//! other implementations, without raising an error.

/// Root and child seed length in bytes.
pub const SEED_LEN: usize = 32;

/// HKDF salt for every epoch derivation.
pub const KDF_SALT: &[u8] = b"nostr-cold-root";

/// Prefix of the HKDF info string; the UTF-8 epoch label follows it.
pub const EPOCH_INFO_PREFIX: &[u8] = b"epoch:";

/// HKDF output length for an epoch child seed.
pub const CHILD_SEED_LEN: usize = SEED_LEN;

/// Event kind used for lineage events unless the caller picks another.
pub const LINEAGE_KIND: u32 = 30001;
