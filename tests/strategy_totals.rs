//! Strategy totals against the closed form.
//!
//! All five materialization strategies must return the same aggregate total
//! for a given `n`; only their allocation shape differs (covered in
//! `alloc_count.rs`).

use ballast::payload::{FieldSum, InlinePayload};
use ballast::strategy::{self, expected_total};

#[test]
fn expected_total_matches_a_naive_per_element_sum() {
    let n = 257;
    let naive: i64 = (0..n)
        .map(|seed| i64::from(InlinePayload::new(seed as i32).sum()))
        .sum();
    assert_eq!(expected_total(n), naive);
}

#[test]
fn strategies_agree_at_probe_scale() {
    let n = 10_000;
    let want = expected_total(n);
    assert_eq!(strategy::heap_objects(n), want);
    assert_eq!(strategy::record_objects(n), want);
    assert_eq!(strategy::inline_array(n), want);
    assert_eq!(strategy::boxed_trait_objects(n), want);
    assert_eq!(strategy::boxed_any_objects(n), want);
}

#[test]
fn strategies_agree_at_ten_times_scale_without_overflow() {
    let n = 100_000;
    let want = expected_total(n);
    // The total is near 8e10 here: past any 32-bit accumulator, comfortably
    // inside the i64 the strategies return.
    assert!(want > i64::from(i32::MAX));
    assert_eq!(strategy::heap_objects(n), want);
    assert_eq!(strategy::record_objects(n), want);
    assert_eq!(strategy::inline_array(n), want);
    assert_eq!(strategy::boxed_trait_objects(n), want);
    assert_eq!(strategy::boxed_any_objects(n), want);
}

#[test]
fn empty_input_yields_an_empty_total() {
    assert_eq!(expected_total(0), 0);
    assert_eq!(strategy::heap_objects(0), 0);
    assert_eq!(strategy::record_objects(0), 0);
    assert_eq!(strategy::inline_array(0), 0);
    assert_eq!(strategy::boxed_trait_objects(0), 0);
    assert_eq!(strategy::boxed_any_objects(0), 0);
}
