//! Fuzz testing for CSS-tree lookups.
//!
//! Sorts arbitrary keys, builds trees at several node sizes, and checks
//! every probe against a naive scan of the sorted data. Lookup must agree
//! on presence, dereference to an equal key, and never panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use csstree::CssTree;

#[derive(Debug, Arbitrary)]
struct FindInput {
    keys: Vec<i32>,
    probes: Vec<i32>,
}

fn check<const NODE_SIZE: usize>(keys: &[i32], probes: &[i32]) {
    let tree = CssTree::<i32, NODE_SIZE>::new(keys.to_vec()).unwrap();

    assert!(tree.iter().copied().eq(keys.iter().copied()));

    for &probe in probes.iter().chain(keys.iter()) {
        let present = keys.binary_search(&probe).is_ok();
        match tree.find(probe) {
            Some(pos) => {
                assert!(present, "phantom match for {}", probe);
                assert_eq!(tree.as_slice()[pos], probe);
            }
            None => assert!(!present, "missed key {}", probe),
        }
    }
}

fuzz_target!(|input: FindInput| {
    let mut keys = input.keys;
    keys.sort_unstable();

    // Single-slot, cache-line, and binary-descent node sizes.
    check::<4>(&keys, &input.probes);
    check::<64>(&keys, &input.probes);
    check::<512>(&keys, &input.probes);
});
