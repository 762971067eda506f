//! Ed25519 detached signing and verification.
//!
//! Signatures travel as lowercase hex of the raw 64 bytes.

use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey, SIGNATURE_LENGTH};

use crate::encoding::decode_hex_array;
use crate::error::{IdentityError, Result};

/// Sign a message with an Ed25519 signing key.
pub fn sign(signing_key: &SigningKey, message: &[u8]) -> Signature {
    signing_key.sign(message)
}

/// Verify a detached Ed25519 signature against a public key and message.
///
/// Uses strict verification: non-canonical signatures and weak public
/// keys are rejected.
pub fn verify(verifying_key: &VerifyingKey, message: &[u8], signature: &Signature) -> Result<()> {
    verifying_key
        .verify_strict(message, signature)
        .map_err(|_| IdentityError::SignatureInvalid)
}

/// Sign a message and return the signature as lowercase hex.
pub fn sign_to_hex(signing_key: &SigningKey, message: &[u8]) -> String {
    hex::encode(sign(signing_key, message).to_bytes())
}

/// Decode a hex-encoded detached signature.
pub fn signature_from_hex(signature_hex: &str) -> Result<Signature> {
    let bytes: [u8; SIGNATURE_LENGTH] = decode_hex_array(signature_hex)?;
    Ok(Signature::from_bytes(&bytes))
}
