//! Lineage events: root-signed attestations of epoch public keys.
//!
//! A lineage event carries the epoch public key in `pubkey` and three
//! tags: `root` (root public key hex), `sig` (detached root signature
//! over the raw epoch public key bytes) and `epoch` (the label).

pub mod attest;
pub mod event;
pub mod verify;

pub use attest::make_lineage_event;
pub use event::{LineageEvent, TAG_EPOCH, TAG_ROOT, TAG_SIG};
pub use verify::{
    check_lineage, check_lineage_for_epoch, verify_lineage, verify_lineage_json, LineageClaim,
};
