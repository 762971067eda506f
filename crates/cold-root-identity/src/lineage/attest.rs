//! Lineage event construction.

use crate::crypto::keys::Ed25519KeyPair;
use crate::encoding::decode_hex_array;
use crate::error::{IdentityError, Result};
use crate::identity::root_keypair_from_seed;
use crate::time;

use super::event::{LineageEvent, TAG_EPOCH, TAG_ROOT, TAG_SIG};

/// Sign a lineage event attesting `epoch_public_key_hex` under the root derived from `root_seed`.
///
/// The root signs the raw 32 epoch public key bytes. `created_at` defaults
/// to the current Unix time in seconds. Tags are emitted in the order
/// `root`, `sig`, `epoch` and `content` is empty.
pub fn make_lineage_event(
    root_seed: &[u8],
    epoch_public_key_hex: &str,
    epoch_label: &str,
    kind: u32,
    created_at: Option<u64>,
) -> Result<LineageEvent> {
    let root = root_keypair_from_seed(root_seed)?;

    let epoch_public_key: [u8; 32] = decode_hex_array(epoch_public_key_hex)
        .map_err(|e| IdentityError::InvalidKey(format!("epoch public key: {e}")))?;
    // reject bytes that do not decode to an Ed25519 point
    Ed25519KeyPair::verifying_key_from_bytes(&epoch_public_key)?;

    let signature = root.sign(&epoch_public_key);
    let created_at = created_at.unwrap_or_else(time::now_secs);

    log::debug!(
        "signed lineage event root={} epoch={} label={epoch_label:?} kind={kind}",
        root.public_key_hex(),
        hex::encode(epoch_public_key)
    );

    Ok(LineageEvent {
        kind,
        pubkey: hex::encode(epoch_public_key),
        created_at,
        tags: vec![
            vec![TAG_ROOT.to_string(), root.public_key_hex()],
            vec![TAG_SIG.to_string(), hex::encode(signature.to_bytes())],
            vec![TAG_EPOCH.to_string(), epoch_label.to_string()],
        ],
        content: String::new(),
    })
}
