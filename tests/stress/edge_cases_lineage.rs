//! Edge cases at the lineage JSON boundary and the derivation inputs.

use cold_root_identity::crypto::kdf::{self, MAX_OUTPUT_LEN};
use cold_root_identity::{
    check_lineage, derive_epoch_key, root_keypair_from_seed, verify_lineage, verify_lineage_json,
    IdentityError, RootSeed,
};

const ROOT_PK: &str = "03a107bff3ce10be1d70dd18e74bc09967e4d6309ba50d5f1ddc8664125531b8";

fn vector_seed() -> Vec<u8> {
    (0u8..32).collect()
}

fn vector_event_json() -> String {
    let seed = RootSeed::from_slice(&vector_seed()).unwrap();
    let (_, event) = seed.activate_epoch("2025-Q1", 30001, Some(1_735_689_600)).unwrap();
    event.to_json().unwrap()
}

#[test]
fn edge_seed_lengths() {
    for len in [0usize, 1, 16, 31, 33, 64] {
        let seed = vec![0u8; len];
        let expected = IdentityError::InvalidSeedLength {
            expected: 32,
            actual: len,
        };
        assert_eq!(derive_epoch_key(&seed, "x").unwrap_err(), expected);
        assert_eq!(root_keypair_from_seed(&seed).unwrap_err(), expected);
    }
}

#[test]
fn edge_kdf_length_limit() {
    assert!(kdf::derive(b"ikm", b"salt", b"info", MAX_OUTPUT_LEN).is_ok());
    assert!(matches!(
        kdf::derive(b"ikm", b"salt", b"info", MAX_OUTPUT_LEN + 1),
        Err(IdentityError::InvalidLength { .. })
    ));
    assert!(matches!(
        kdf::derive(b"ikm", b"salt", b"info", usize::MAX),
        Err(IdentityError::InvalidLength { .. })
    ));
}

#[test]
fn edge_empty_and_long_labels() {
    let seed = vector_seed();
    let empty = derive_epoch_key(&seed, "").unwrap();
    let long_label = "q".repeat(10_000);
    let long = derive_epoch_key(&seed, &long_label).unwrap();
    assert_ne!(empty.public_key_hex(), long.public_key_hex());
}

#[test]
fn edge_json_with_extra_fields_verifies() {
    let json = vector_event_json();
    let with_extras = json.replacen('{', r#"{"id":null,"sig":null,"relay":"wss://x","#, 1);
    assert!(verify_lineage_json(ROOT_PK, &with_extras));
}

#[test]
fn edge_json_shapes_rejected() {
    for bad in [
        "",
        "[]",
        "null",
        "{}",
        r#"{"kind":30001,"pubkey":"00","created_at":0,"tags":"root"}"#,
        r#"{"kind":"30001","pubkey":"00","created_at":0,"tags":[]}"#,
        r#"{"kind":30001,"pubkey":"00","created_at":-1,"tags":[]}"#,
    ] {
        assert!(!verify_lineage_json(ROOT_PK, bad), "{bad:?} should not verify");
    }
}

#[test]
fn edge_duplicate_tags_use_last() {
    let seed = RootSeed::from_slice(&vector_seed()).unwrap();
    let (_, mut event) = seed.activate_epoch("2025-Q1", 30001, Some(0)).unwrap();
    let genuine_sig = event.tags[1].clone();

    event.tags.insert(0, vec!["sig".into(), "00".repeat(64)]);
    assert!(verify_lineage(ROOT_PK, &event));

    event.tags.push(vec!["sig".into(), "00".repeat(64)]);
    assert!(!verify_lineage(ROOT_PK, &event));

    event.tags.pop();
    assert_eq!(event.tags[2], genuine_sig);
    assert!(verify_lineage(ROOT_PK, &event));
}

#[test]
fn edge_trailing_root_tag_overrides_genuine_one() {
    let seed = RootSeed::from_slice(&vector_seed()).unwrap();
    let (_, mut event) = seed.activate_epoch("2025-Q1", 30001, Some(0)).unwrap();
    event.tags.push(vec!["root".into(), "11".repeat(32)]);

    assert!(!verify_lineage(ROOT_PK, &event));
    assert_eq!(
        check_lineage(ROOT_PK, &event).unwrap_err(),
        IdentityError::RootMismatch
    );
}

#[test]
fn edge_non_string_unknown_tags_still_verify() {
    let json = vector_event_json();
    let with_odd_tags = json.replacen(
        r#""tags":["#,
        r#""tags":[["n",1],{"x":true},7,[null,"root"],["relay","wss://x",3],"#,
        1,
    );
    assert_ne!(with_odd_tags, json);
    assert!(verify_lineage_json(ROOT_PK, &with_odd_tags));
}

#[test]
fn edge_non_string_root_value_is_not_a_root() {
    let json = vector_event_json();
    let with_numeric_root = json.replacen(r#"["sig","#, r#"["root",5],["sig","#, 1);
    assert_ne!(with_numeric_root, json);
    // ["root", 5] reduces to ["root"], which carries no value and is skipped
    assert!(verify_lineage_json(ROOT_PK, &with_numeric_root));
}

#[test]
fn edge_root_tag_present_but_empty() {
    let seed = RootSeed::from_slice(&vector_seed()).unwrap();
    let (_, mut event) = seed.activate_epoch("2025-Q1", 30001, Some(0)).unwrap();
    event.tags[0][1].clear();
    assert!(!verify_lineage(ROOT_PK, &event));
    assert!(!verify_lineage("", &event));
}
