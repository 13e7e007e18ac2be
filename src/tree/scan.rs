//! In-node slot search strategies.
//!
//! Each descent step needs one number from the current node: how many of its
//! slot keys are strictly less than the probe. Both strategies below return
//! that count, in `0..=slots.len()`, with the full slot count meaning every
//! key in the node was smaller.
//!
//! Small nodes are scanned forward: a handful of sequential comparisons on
//! one cache line beats branch-mispredicting halving. Nodes larger than 256
//! bytes use a binary lower bound instead. The caller picks the strategy on
//! a const condition, so each monomorphization compiles down to exactly one
//! of them.

/// Forward scan for the first slot key not less than `key`.
#[inline]
pub(crate) fn scan_forward<K: Ord>(slots: &[K], key: &K) -> usize {
    let mut lo = 0;
    while lo < slots.len() && slots[lo] < *key {
        lo += 1;
    }
    lo
}

/// Binary lower bound over the node's slot keys.
#[inline]
pub(crate) fn lower_bound<K: Ord>(slots: &[K], key: &K) -> usize {
    slots.partition_point(|slot| slot < key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both(slots: &[i32], key: i32) -> usize {
        let scanned = scan_forward(slots, &key);
        let bounded = lower_bound(slots, &key);
        assert_eq!(scanned, bounded, "strategies disagree on key {}", key);
        scanned
    }

    #[test]
    fn probe_below_every_slot() {
        assert_eq!(both(&[10, 20, 30, 40], 5), 0);
    }

    #[test]
    fn probe_above_every_slot() {
        assert_eq!(both(&[10, 20, 30, 40], 99), 4);
    }

    #[test]
    fn probe_between_slots() {
        assert_eq!(both(&[10, 20, 30, 40], 25), 2);
    }

    #[test]
    fn exact_match_counts_lesser_keys_only() {
        assert_eq!(both(&[10, 20, 30, 40], 30), 2);
    }

    #[test]
    fn duplicates_resolve_to_first_equal_slot() {
        assert_eq!(both(&[10, 20, 20, 20, 40], 20), 1);
    }

    #[test]
    fn strategies_agree_on_every_count() {
        let slots = [2, 4, 6, 8, 10, 12, 14, 16];
        for key in 0..=18 {
            both(&slots, key);
        }
    }
}
