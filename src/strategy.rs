//! Allocation-pattern strategies.
//!
//! Five ways to materialize `n` equivalent 64-byte aggregates seeded
//! `0..n`, each returning the `i64` total of every field sum so the work
//! cannot be optimized away. The materialized aggregates stay live exactly
//! until the total is computed and are dropped on return, so allocation and
//! deallocation cost both land inside a measured iteration.
//!
//! Allocation volume per strategy, observable through
//! [`crate::counting::CountingAlloc`]:
//!
//! | strategy                | heap allocations |
//! |-------------------------|------------------|
//! | [`heap_objects`]        | n + 1            |
//! | [`record_objects`]      | n + 1            |
//! | [`inline_array`]        | 1                |
//! | [`boxed_trait_objects`] | n + 1            |
//! | [`boxed_any_objects`]   | n + 1            |
//!
//! The inline/boxed pair is the comparison this group exists to show: the
//! same `Copy` value costs one allocation total stored inline, and one
//! allocation per element the moment each value is placed behind a
//! polymorphic pointer.

use std::any::Any;

use crate::payload::{FieldSum, HeapPayload, InlinePayload, KeyPayload, RecordPayload};

/// Closed-form total for `n` aggregates seeded `0..n`:
/// `16 * (0 + 1 + ... + (n-1)) + 136 * n`.
///
/// Widened to `i64`: at `n = 100_000` the first term alone is near
/// `8 * 10^10`, past any 32-bit accumulator.
pub fn expected_total(n: usize) -> i64 {
    let n = n as i64;
    16 * (n * (n - 1) / 2) + 136 * n
}

/// Strategy 1: one heap object per aggregate.
///
/// `n` separate boxes plus the backing vec of pointers.
pub fn heap_objects(n: usize) -> i64 {
    let mut items: Vec<Box<HeapPayload>> = Vec::with_capacity(n);
    for seed in 0..n {
        items.push(Box::new(HeapPayload::new(seed as i32)));
    }
    total(&items)
}

/// Strategy 2: one heap object per immutable structurally-equal aggregate.
///
/// Same allocation shape as [`heap_objects`]; only the payload's equality
/// and mutability semantics differ.
pub fn record_objects(n: usize) -> i64 {
    let mut items: Vec<Box<RecordPayload>> = Vec::with_capacity(n);
    for seed in 0..n {
        items.push(Box::new(RecordPayload::new(seed as i32)));
    }
    total(&items)
}

/// Strategy 3: all aggregates inline in one contiguous buffer.
///
/// The vec is the only heap object; the elements are the buffer.
pub fn inline_array(n: usize) -> i64 {
    let mut items: Vec<InlinePayload> = Vec::with_capacity(n);
    for seed in 0..n {
        items.push(InlinePayload::new(seed as i32));
    }
    total(&items)
}

/// Strategy 4: one box per aggregate behind the capability trait.
///
/// Each `Copy` value is copied into its own heap cell at the `Box::new`.
/// The pointer array costs the same as strategy 3; the elements cost `n`
/// extra allocations.
pub fn boxed_trait_objects(n: usize) -> i64 {
    let mut items: Vec<Box<dyn FieldSum>> = Vec::with_capacity(n);
    for seed in 0..n {
        items.push(Box::new(KeyPayload::new(seed as i32)));
    }
    total(&items)
}

/// Strategy 4, untyped variant: one box per aggregate behind [`Any`].
///
/// Consumption has to downcast each element back to [`KeyPayload`] before it
/// can sum; the allocation shape is identical to [`boxed_trait_objects`].
pub fn boxed_any_objects(n: usize) -> i64 {
    let mut items: Vec<Box<dyn Any>> = Vec::with_capacity(n);
    for seed in 0..n {
        items.push(Box::new(KeyPayload::new(seed as i32)));
    }
    total_any(&items)
}

/// Sums every aggregate through the [`FieldSum`] capability.
///
/// Non-inlined so each strategy measures materialization plus one faithful
/// traversal, not whatever the optimizer could prove about the two fused.
#[inline(never)]
pub fn total<T: FieldSum>(items: &[T]) -> i64 {
    let mut acc = 0i64;
    for item in items {
        acc += i64::from(item.sum());
    }
    acc
}

/// Sums untyped boxes by downcasting each back to [`KeyPayload`].
///
/// Elements of any other type contribute nothing; the strategies only ever
/// store `KeyPayload`, and the tests pin the totals to the closed form.
#[inline(never)]
pub fn total_any(items: &[Box<dyn Any>]) -> i64 {
    let mut acc = 0i64;
    for item in items {
        if let Some(payload) = item.downcast_ref::<KeyPayload>() {
            acc += i64::from(payload.sum());
        }
    }
    acc
}
