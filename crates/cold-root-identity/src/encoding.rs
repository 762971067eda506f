//! Hex and bech32 encodings.
//!
//! Keys and signatures cross the wire as lowercase hex. `npub`/`nsec`
//! are the NIP-19 bech32 forms of a public key and a 32-byte seed.

use bech32::{FromBase32, ToBase32, Variant};

use crate::error::{IdentityError, Result};

/// Human-readable part for bech32 public keys.
pub const NPUB_HRP: &str = "npub";

/// Human-readable part for bech32 secret seeds.
pub const NSEC_HRP: &str = "nsec";

/// Decode hex (any case) into exactly `N` bytes.
pub fn decode_hex_array<const N: usize>(hex_str: &str) -> Result<[u8; N]> {
    let bytes = hex::decode(hex_str).map_err(|e| IdentityError::InvalidHex(e.to_string()))?;
    bytes.try_into().map_err(|b: Vec<u8>| {
        IdentityError::InvalidHex(format!("expected {N} bytes, got {}", b.len()))
    })
}

/// Encode bytes as standard bech32 under `hrp`.
pub fn encode_bech32(hrp: &str, data: &[u8]) -> Result<String> {
    bech32::encode(hrp, data.to_base32(), Variant::Bech32)
        .map_err(|e| IdentityError::Encoding(format!("bech32 encode failed: {e}")))
}

/// Decode a bech32 string, requiring the given `hrp` and the standard variant.
pub fn decode_bech32(expected_hrp: &str, encoded: &str) -> Result<Vec<u8>> {
    let (hrp, data, variant) = bech32::decode(encoded)
        .map_err(|e| IdentityError::Encoding(format!("bech32 decode failed: {e}")))?;
    if hrp != expected_hrp {
        return Err(IdentityError::Encoding(format!(
            "expected prefix {expected_hrp}, got {hrp}"
        )));
    }
    if variant != Variant::Bech32 {
        return Err(IdentityError::Encoding("expected bech32, got bech32m".into()));
    }
    Vec::<u8>::from_base32(&data)
        .map_err(|e| IdentityError::Encoding(format!("bech32 payload invalid: {e}")))
}

fn decode_bech32_32(expected_hrp: &str, encoded: &str) -> Result<[u8; 32]> {
    decode_bech32(expected_hrp, encoded)?
        .try_into()
        .map_err(|b: Vec<u8>| {
            IdentityError::Encoding(format!(
                "{expected_hrp} payload must be 32 bytes, got {}",
                b.len()
            ))
        })
}

/// `npub1...` for a 32-byte public key.
pub fn npub(public_key: &[u8; 32]) -> Result<String> {
    encode_bech32(NPUB_HRP, public_key)
}

/// `nsec1...` for a 32-byte seed.
pub fn nsec(seed: &[u8; 32]) -> Result<String> {
    encode_bech32(NSEC_HRP, seed)
}

/// Decode an `npub1...` string into public key bytes.
pub fn decode_npub(encoded: &str) -> Result<[u8; 32]> {
    decode_bech32_32(NPUB_HRP, encoded)
}

/// Decode an `nsec1...` string into seed bytes.
pub fn decode_nsec(encoded: &str) -> Result<[u8; 32]> {
    decode_bech32_32(NSEC_HRP, encoded)
}

/// Lowercase hex of a public key given either as hex or as `npub1...`.
pub fn public_key_hex(input: &str) -> Result<String> {
    let input = input.trim();
    let bytes: [u8; 32] = if input.starts_with("npub1") {
        decode_npub(input)?
    } else {
        decode_hex_array(input)?
    };
    Ok(hex::encode(bytes))
}
