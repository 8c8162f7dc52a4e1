//! # `ballast` - data-layout and parameter-passing probes
//!
//! Micro-benchmark probes measuring what data layout costs:
//!
//! - **Parameter passing** ([`point`], [`consume`]): four structurally
//!   identical 64-byte aggregates (heap vs. inline storage, identity vs.
//!   structural equality), each pushed through a non-inlined consumer by
//!   value or behind a reference.
//! - **Allocation patterns** ([`payload`], [`strategy`]): the same 64-byte
//!   payload materialized `n` times as separate heap objects, as one
//!   contiguous inline buffer, or as one box per element behind a
//!   polymorphic pointer. The boxing path turns a single-allocation layout
//!   into `n + 1` allocations, which is the comparison the probes exist to
//!   show.
//!
//! Probes are plain library functions. `benches/` wraps them in criterion;
//! [`counting::CountingAlloc`] makes allocation volume observable for the
//! tests and the `alloc_report` binary; `cargo xtask bench` runs the whole
//! matrix and aggregates a report.
//!
//! ## Methodology
//!
//! Every consumer is `#[inline(never)]` and every field sum
//! `#[inline(always)]`, so the measured difference between probes is storage
//! and calling convention, not sum codegen. The passing probes consume a
//! [`point::Fixture`] built once outside the timed region and never allocate
//! while the clock runs. The allocation probes keep each iteration's
//! allocations and frees inside the measured region, so materialization and
//! teardown are both attributed to the strategy being measured.

pub mod consume;
pub mod counting;
pub mod payload;
pub mod point;
pub mod strategy;

pub use counting::{AllocStats, CountingAlloc};
pub use payload::{FieldSum, HeapPayload, InlinePayload, KeyPayload, RecordPayload};
pub use point::{Fixture, HeapPoint, KeyPoint, PlainPoint, SharedPoint, SEED_FIELDS, SEED_SUM};

// Compile-time layout claims the probes rely on.
const _: () = {
    use core::mem;

    // Every aggregate is exactly sixteen i32s, nothing more.
    assert!(mem::size_of::<PlainPoint>() == 64);
    assert!(mem::size_of::<KeyPoint>() == 64);
    assert!(mem::size_of::<HeapPoint>() == 64);
    assert!(mem::size_of::<SharedPoint>() == 64);
    assert!(mem::size_of::<HeapPayload>() == 64);
    assert!(mem::size_of::<RecordPayload>() == 64);
    assert!(mem::size_of::<InlinePayload>() == 64);
    assert!(mem::size_of::<KeyPayload>() == 64);

    // Owned heap storage stays a thin pointer; only the trait-object path
    // carries a vtable word.
    assert!(mem::size_of::<Box<HeapPayload>>() == mem::size_of::<usize>());
    assert!(mem::size_of::<Box<dyn FieldSum>>() == 2 * mem::size_of::<usize>());
};
