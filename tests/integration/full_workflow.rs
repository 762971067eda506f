//! End-to-end workflow: an offline root provisions a year of epoch keys,
//! publishes their lineage events as JSON, and a verifier who only knows
//! the root public key checks each one.

use cold_root_identity::time::{quarter_label, quarter_start};
use cold_root_identity::{
    check_lineage_for_epoch, verify_lineage, verify_lineage_json, IdentityError, LineageEvent,
    RootSeed, LINEAGE_KIND,
};

#[test]
fn full_year_of_epochs() {
    // Offline side
    let root = RootSeed::generate();
    let root_pub = root.root_keypair().public_key_hex();

    let mut published = Vec::new();
    for quarter in 1..=4 {
        let label = quarter_label(2026, quarter);
        let created_at = quarter_start(&label).unwrap();
        let (epoch, event) = root
            .activate_epoch(&label, LINEAGE_KIND, Some(created_at))
            .expect("activation should succeed");
        published.push((epoch.public_key_hex(), event.to_json().unwrap()));
    }

    // Online side: only the root public key and the published JSON
    let mut seen = std::collections::HashSet::new();
    for (epoch_pub, json) in &published {
        assert!(verify_lineage_json(&root_pub, json));

        let event = LineageEvent::from_json(json).unwrap();
        let claim = check_lineage_for_epoch(&root_pub, &event, epoch_pub).unwrap();
        assert!(seen.insert(claim.epoch_public_key.clone()), "epoch keys must be unique");
        assert_eq!(claim.kind, LINEAGE_KIND);
    }
    assert_eq!(seen.len(), 4);
}

#[test]
fn epoch_keys_regenerate_from_root_alone() {
    let root = RootSeed::generate();
    let restored = RootSeed::from_hex(&root.to_hex()).unwrap();

    for label in ["2026-Q1", "2026-Q2", "launch", "ünïcødé"] {
        let a = root.derive_epoch_key(label).unwrap();
        let b = restored.derive_epoch_key(label).unwrap();
        assert_eq!(a.seed_hex(), b.seed_hex());
        assert_eq!(a.public_key_hex(), b.public_key_hex());
    }
}

#[test]
fn epoch_key_signs_notes_under_attested_identity() {
    let root = RootSeed::generate();
    let (epoch, event) = root.activate_epoch("2026-Q3", LINEAGE_KIND, None).unwrap();

    // a verifier trusts the epoch key through lineage, then checks a note signature
    assert!(verify_lineage(&root.root_keypair().public_key_hex(), &event));
    let note = b"hello from the epoch key";
    let sig = epoch.sign(note);
    let epoch_vk = cold_root_identity::crypto::keys::Ed25519KeyPair::verifying_key_from_hex(
        &event.pubkey,
    )
    .unwrap();
    assert!(cold_root_identity::crypto::signing::verify(&epoch_vk, note, &sig).is_ok());
}

#[test]
fn lineage_from_another_root_is_rejected() {
    let root = RootSeed::generate();
    let impostor = RootSeed::generate();
    let epoch = root.derive_epoch_key("2026-Q1").unwrap();

    // impostor attests the genuine epoch key with its own root tag
    let forged = impostor
        .lineage_event(&epoch.public_key_hex(), "2026-Q1", LINEAGE_KIND, Some(0))
        .unwrap();

    let root_pub = root.root_keypair().public_key_hex();
    assert!(!verify_lineage(&root_pub, &forged));
    assert_eq!(
        check_lineage_for_epoch(&root_pub, &forged, &epoch.public_key_hex()).unwrap_err(),
        IdentityError::RootMismatch
    );

    // and swapping in the genuine root tag breaks the signature
    let mut relabeled = forged.clone();
    relabeled.tags[0][1] = root_pub.clone();
    assert_eq!(
        check_lineage_for_epoch(&root_pub, &relabeled, &epoch.public_key_hex()).unwrap_err(),
        IdentityError::SignatureInvalid
    );
}
