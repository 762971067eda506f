//! Cold root identity: deterministic epoch keys under an offline root.
//!
//! A single 32-byte root seed is kept offline. For every epoch label it
//! deterministically derives an Ed25519 key pair through HKDF-SHA256,
//! and the root key signs a lineage event binding that epoch public key
//! back to the root public key. Anyone holding the root public key can
//! verify the lineage without ever seeing the root seed.
//!
//! ```
//! use cold_root_identity::{verify_lineage, RootSeed, LINEAGE_KIND};
//!
//! let root = RootSeed::from_bytes([7u8; 32]);
//! let (epoch, event) = root.activate_epoch("2026-Q1", LINEAGE_KIND, Some(1_767_225_600))?;
//!
//! assert_eq!(event.pubkey, epoch.public_key_hex());
//! assert!(verify_lineage(&root.root_keypair().public_key_hex(), &event));
//! # Ok::<(), cold_root_identity::IdentityError>(())
//! ```

pub mod crypto;
pub mod encoding;
pub mod error;
pub mod identity;
pub mod lineage;
pub mod time;

// Re-export primary types
pub use error::{IdentityError, Result};
pub use identity::params::{CHILD_SEED_LEN, EPOCH_INFO_PREFIX, KDF_SALT, LINEAGE_KIND, SEED_LEN};
pub use identity::{
    derive_epoch_key, root_keypair_from_seed, DerivedEpochKey, RootKeyPair, RootSeed,
};
pub use lineage::{
    check_lineage, check_lineage_for_epoch, make_lineage_event, verify_lineage,
    verify_lineage_json, LineageClaim, LineageEvent,
};
