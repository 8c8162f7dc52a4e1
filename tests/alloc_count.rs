//! Allocation-count assertions for the strategies.
//!
//! Each integration test file is its own binary, so this one can install the
//! counting allocator globally without touching the rest of the suite. The
//! per-thread counters in `measure` keep parallel test threads from
//! contaminating each other's deltas.

use ballast::counting::{self, CountingAlloc};
use ballast::strategy;

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc::system();

const N: usize = 1_000;

// Every aggregate is 64 bytes, inline or boxed.
const PAYLOAD_SIZE: u64 = 64;

#[test]
fn inline_array_is_a_single_allocation() {
    let (total, stats) = counting::measure(|| strategy::inline_array(N));
    assert_eq!(total, strategy::expected_total(N));
    assert_eq!(stats.allocations, 1);
    assert_eq!(stats.bytes, N as u64 * PAYLOAD_SIZE);
}

#[test]
fn heap_objects_allocate_one_per_element_plus_backing() {
    let (total, stats) = counting::measure(|| strategy::heap_objects(N));
    assert_eq!(total, strategy::expected_total(N));
    assert_eq!(stats.allocations, N as u64 + 1);
}

#[test]
fn record_objects_allocate_one_per_element_plus_backing() {
    let (total, stats) = counting::measure(|| strategy::record_objects(N));
    assert_eq!(total, strategy::expected_total(N));
    assert_eq!(stats.allocations, N as u64 + 1);
}

#[test]
fn boxed_trait_objects_allocate_one_per_element_plus_backing() {
    let (total, stats) = counting::measure(|| strategy::boxed_trait_objects(N));
    assert_eq!(total, strategy::expected_total(N));
    assert_eq!(stats.allocations, N as u64 + 1);
}

#[test]
fn boxed_any_objects_allocate_one_per_element_plus_backing() {
    let (total, stats) = counting::measure(|| strategy::boxed_any_objects(N));
    assert_eq!(total, strategy::expected_total(N));
    assert_eq!(stats.allocations, N as u64 + 1);
}

#[test]
fn boxing_pays_per_element_even_for_copy_values() {
    let (_, inline) = counting::measure(|| strategy::inline_array(N));
    let (_, boxed) = counting::measure(|| strategy::boxed_trait_objects(N));
    assert_eq!(inline.allocations, 1);
    assert_eq!(boxed.allocations, inline.allocations + N as u64);
    // Inline, the backing buffer is the payload.
    assert_eq!(inline.bytes, N as u64 * PAYLOAD_SIZE);
}

#[test]
fn process_counters_move_once_the_wrapper_is_installed() {
    let before = counting::process_stats();
    let _ = strategy::inline_array(N);
    let after = counting::process_stats();
    assert!(after.allocations > before.allocations);
}
