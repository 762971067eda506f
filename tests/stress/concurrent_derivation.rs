//! Stress test: derivation, signing and verification run concurrently
//! from many threads with no shared state, and agree with a serial run.

use std::sync::Arc;
use std::thread;

use cold_root_identity::{derive_epoch_key, make_lineage_event, verify_lineage, RootSeed};

#[test]
fn stress_concurrent_derivation_matches_serial() {
    let root = Arc::new(RootSeed::from_bytes([0x42; 32]));
    let labels: Vec<String> = (0..64).map(|i| format!("2030-Q{}-{i}", i % 4 + 1)).collect();

    let serial: Vec<String> = labels
        .iter()
        .map(|l| root.derive_epoch_key(l).unwrap().public_key_hex())
        .collect();

    let handles: Vec<_> = labels
        .iter()
        .cloned()
        .map(|label| {
            let root = Arc::clone(&root);
            thread::spawn(move || {
                let key = derive_epoch_key(root.as_bytes(), &label).unwrap();
                let event = make_lineage_event(
                    root.as_bytes(),
                    &key.public_key_hex(),
                    &label,
                    30001,
                    Some(0),
                )
                .unwrap();
                let root_pub = root.root_keypair().public_key_hex();
                assert!(verify_lineage(&root_pub, &event));
                key.public_key_hex()
            })
        })
        .collect();

    let concurrent: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().expect("thread should not panic"))
        .collect();

    assert_eq!(serial, concurrent);
}

#[test]
fn stress_concurrent_verification_of_one_event() {
    let root = RootSeed::from_bytes([0x43; 32]);
    let (_, event) = root.activate_epoch("2030-Q1", 30001, Some(0)).unwrap();
    let event = Arc::new(event);
    let root_pub = Arc::new(root.root_keypair().public_key_hex());

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let event = Arc::clone(&event);
            let root_pub = Arc::clone(&root_pub);
            thread::spawn(move || (0..50).all(|_| verify_lineage(&root_pub, &event)))
        })
        .collect();

    for h in handles {
        assert!(h.join().unwrap());
    }
}
