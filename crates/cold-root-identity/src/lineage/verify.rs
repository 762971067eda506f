//! Lineage verification.
//!
//! [`verify_lineage`] answers yes or no and never fails. [`check_lineage`]
//! reports why an event was rejected: a malformed event, a root that is
//! not the claimed one, or a signature that does not verify.

use crate::crypto::keys::Ed25519KeyPair;
use crate::crypto::signing;
use crate::encoding::decode_hex_array;
use crate::error::{IdentityError, Result};

use super::event::LineageEvent;

/// What a verified lineage event establishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineageClaim {
    /// Lowercase hex root public key that signed the event.
    pub root_public_key: String,
    /// Lowercase hex epoch public key the root attested.
    pub epoch_public_key: String,
    /// The `epoch` tag, if the event carries one.
    pub epoch_label: Option<String>,
    pub kind: u32,
    pub created_at: u64,
}

fn malformed(reason: impl Into<String>) -> IdentityError {
    IdentityError::MalformedEvent(reason.into())
}

/// Verify `event` against the root key the caller expects, reporting the failure reason.
///
/// Tag order and unrecognized tags do not matter. The event kind is not
/// checked.
pub fn check_lineage(
    claimed_root_public_key_hex: &str,
    event: &LineageEvent,
) -> Result<LineageClaim> {
    let root_hex = event
        .root_hex()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| malformed("missing root tag"))?;
    let sig_hex = event
        .sig_hex()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| malformed("missing sig tag"))?;
    if event.pubkey.is_empty() {
        return Err(malformed("missing pubkey"));
    }

    if !root_hex.eq_ignore_ascii_case(claimed_root_public_key_hex) {
        return Err(IdentityError::RootMismatch);
    }

    let root_key = Ed25519KeyPair::verifying_key_from_hex(claimed_root_public_key_hex)
        .map_err(|e| malformed(format!("root key: {e}")))?;
    let epoch_public_key: [u8; 32] =
        decode_hex_array(&event.pubkey).map_err(|e| malformed(format!("pubkey: {e}")))?;
    let signature =
        signing::signature_from_hex(sig_hex).map_err(|e| malformed(format!("sig tag: {e}")))?;

    signing::verify(&root_key, &epoch_public_key, &signature)?;

    Ok(LineageClaim {
        root_public_key: hex::encode(root_key.to_bytes()),
        epoch_public_key: hex::encode(epoch_public_key),
        epoch_label: event.epoch_label().map(str::to_string),
        kind: event.kind,
        created_at: event.created_at,
    })
}

/// Like [`check_lineage`], and additionally require the event to attest
/// `expected_epoch_public_key_hex` (case-insensitive).
pub fn check_lineage_for_epoch(
    claimed_root_public_key_hex: &str,
    event: &LineageEvent,
    expected_epoch_public_key_hex: &str,
) -> Result<LineageClaim> {
    let claim = check_lineage(claimed_root_public_key_hex, event)?;
    if !claim
        .epoch_public_key
        .eq_ignore_ascii_case(expected_epoch_public_key_hex)
    {
        return Err(IdentityError::EpochMismatch(format!(
            "event attests {}, expected {expected_epoch_public_key_hex}",
            claim.epoch_public_key
        )));
    }
    Ok(claim)
}

/// `true` iff `event` was signed by `claimed_root_public_key_hex` over its `pubkey`.
///
/// Malformed events, missing tags, a differing root and invalid
/// signatures all yield `false`.
///
/// Signatures are checked with Ed25519 strict verification, which also
/// rejects non-canonical signatures and small-order keys that the libsodium
/// and tweetnacl `verify_detached` functions accept. Events produced by
/// [`make_lineage_event`](crate::make_lineage_event) always pass.
pub fn verify_lineage(claimed_root_public_key_hex: &str, event: &LineageEvent) -> bool {
    match check_lineage(claimed_root_public_key_hex, event) {
        Ok(_) => true,
        Err(e) => {
            log::debug!("lineage rejected: {e}");
            false
        }
    }
}

/// [`verify_lineage`] for an event still in JSON form.
///
/// JSON that does not have the lineage event shape yields `false`.
pub fn verify_lineage_json(claimed_root_public_key_hex: &str, event_json: &str) -> bool {
    match LineageEvent::from_json(event_json) {
        Ok(event) => verify_lineage(claimed_root_public_key_hex, &event),
        Err(e) => {
            log::debug!("lineage rejected: {e}");
            false
        }
    }
}
