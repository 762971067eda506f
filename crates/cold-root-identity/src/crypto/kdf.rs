//! HKDF-SHA256 (RFC 5869) extract-and-expand.
//!
//! The identity scheme depends on this being byte-exact across
//! implementations, so both phases are written out over HMAC-SHA256
//! rather than hidden behind a higher-level API.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use zeroize::Zeroize;

use crate::error::{IdentityError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Output size of SHA-256, and therefore of every HKDF block.
pub const HASH_LEN: usize = 32;

/// Largest output HKDF-SHA256 can produce (255 blocks).
pub const MAX_OUTPUT_LEN: usize = 255 * HASH_LEN;

fn hmac_sha256(key: &[u8], parts: &[&[u8]]) -> Result<[u8; HASH_LEN]> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| IdentityError::DerivationFailed(format!("HMAC key rejected: {e}")))?;
    for part in parts {
        mac.update(part);
    }
    Ok(mac.finalize().into_bytes().into())
}

/// Extract phase: `PRK = HMAC-SHA256(key = salt, data = ikm)`.
///
/// An empty salt is equivalent to `HASH_LEN` zero bytes.
pub fn extract(salt: &[u8], ikm: &[u8]) -> Result<[u8; HASH_LEN]> {
    hmac_sha256(salt, &[ikm])
}

/// Expand phase: `T(i) = HMAC-SHA256(PRK, T(i-1) || info || i)`, truncated to `length`.
pub fn expand(prk: &[u8; HASH_LEN], info: &[u8], length: usize) -> Result<Vec<u8>> {
    check_length(length)?;

    let blocks = length.div_ceil(HASH_LEN);
    let mut okm = Vec::with_capacity(length);
    let mut block = [0u8; HASH_LEN];

    for i in 1..=blocks {
        // blocks <= 255, so the counter always fits in one byte.
        let counter = [i as u8];
        let previous: &[u8] = if i == 1 { &[] } else { &block };
        block = hmac_sha256(prk, &[previous, info, &counter])?;

        let take = (length - okm.len()).min(HASH_LEN);
        okm.extend_from_slice(&block[..take]);
    }

    block.zeroize();
    Ok(okm)
}

/// Derive `length` bytes of output keying material from `ikm`.
///
/// Fails with [`IdentityError::InvalidLength`] before any hashing when
/// `length` exceeds [`MAX_OUTPUT_LEN`].
pub fn derive(ikm: &[u8], salt: &[u8], info: &[u8], length: usize) -> Result<Vec<u8>> {
    check_length(length)?;

    let mut prk = extract(salt, ikm)?;
    let okm = expand(&prk, info, length);
    prk.zeroize();
    okm
}

/// Derive exactly `N` bytes into a fixed-size array.
pub fn derive_array<const N: usize>(ikm: &[u8], salt: &[u8], info: &[u8]) -> Result<[u8; N]> {
    let mut okm = derive(ikm, salt, info, N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(&okm);
    okm.zeroize();
    Ok(out)
}

fn check_length(length: usize) -> Result<()> {
    if length > MAX_OUTPUT_LEN {
        return Err(IdentityError::InvalidLength {
            requested: length,
            max: MAX_OUTPUT_LEN,
        });
    }
    Ok(())
}
