//! Root identity and epoch key derivation.
//!
//! A 32-byte root seed is the Ed25519 root signing seed. Each epoch
//! label derives an independent child seed through HKDF-SHA256, and
//! that child seed is the epoch's Ed25519 signing seed.

pub mod epoch;
pub mod params;
pub mod root;
pub mod seed;

pub use epoch::{derive_epoch_key, DerivedEpochKey};
pub use root::{root_keypair_from_seed, RootKeyPair};
pub use seed::RootSeed;
