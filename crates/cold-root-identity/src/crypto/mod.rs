//! Cryptographic primitives for cold root identity.
//!
//! This module provides:
//! - HKDF-SHA256 extract-and-expand key derivation
//! - Ed25519 seed-to-keypair expansion
//! - Detached Ed25519 signing and verification over hex-encoded values
//! - Cryptographically secure random number generation

pub mod kdf;
pub mod keys;
pub mod random;
pub mod signing;
