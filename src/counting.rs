//! Allocation counting.
//!
//! [`CountingAlloc`] wraps a [`GlobalAlloc`] and counts allocation calls and
//! requested bytes, both process-wide and per thread. Install it as the
//! global allocator of a test or report binary, then read deltas around the
//! region of interest:
//!
//! ```rust,ignore
//! use ballast::counting::{self, CountingAlloc};
//!
//! #[global_allocator]
//! static GLOBAL: CountingAlloc = CountingAlloc::system();
//!
//! let (total, stats) = counting::measure(|| ballast::strategy::inline_array(1_000));
//! assert_eq!(stats.allocations, 1);
//! ```
//!
//! The per-thread counters are const-initialized `thread_local!` cells:
//! touching them never allocates, and parallel test threads cannot
//! contaminate each other's deltas. The counters only move while a
//! `CountingAlloc` is installed via `#[global_allocator]`; read through a
//! different global allocator they stay at zero.
//!
//! Deallocations are not tracked. The probes assert allocation volume only.

use core::alloc::{GlobalAlloc, Layout};
use std::alloc::System;
use std::cell::Cell;
use std::ops::Sub;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Allocation counters at one observation point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AllocStats {
    /// Number of `alloc`/`alloc_zeroed`/`realloc` calls.
    pub allocations: u64,
    /// Bytes requested across those calls.
    pub bytes: u64,
}

impl Sub for AllocStats {
    type Output = AllocStats;

    fn sub(self, rhs: Self) -> Self {
        Self {
            allocations: self.allocations - rhs.allocations,
            bytes: self.bytes - rhs.bytes,
        }
    }
}

static PROCESS_ALLOCATIONS: AtomicU64 = AtomicU64::new(0);
static PROCESS_BYTES: AtomicU64 = AtomicU64::new(0);

thread_local! {
    static THREAD_ALLOCATIONS: Cell<u64> = const { Cell::new(0) };
    static THREAD_BYTES: Cell<u64> = const { Cell::new(0) };
}

/// A counting wrapper around a global allocator.
pub struct CountingAlloc<A = System> {
    inner: A,
}

impl CountingAlloc<System> {
    /// Counting wrapper over the system allocator.
    pub const fn system() -> Self {
        Self { inner: System }
    }
}

impl<A> CountingAlloc<A> {
    /// Counting wrapper over an arbitrary inner allocator.
    pub const fn new(inner: A) -> Self {
        Self { inner }
    }
}

fn record(bytes: usize) {
    PROCESS_ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
    PROCESS_BYTES.fetch_add(bytes as u64, Ordering::Relaxed);
    // `try_with`: allocations during thread teardown still count
    // process-wide after the thread-local slots are gone.
    let _ = THREAD_ALLOCATIONS.try_with(|c| c.set(c.get() + 1));
    let _ = THREAD_BYTES.try_with(|c| c.set(c.get() + bytes as u64));
}

unsafe impl<A: GlobalAlloc> GlobalAlloc for CountingAlloc<A> {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        record(layout.size());
        self.inner.alloc(layout)
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        record(layout.size());
        self.inner.alloc_zeroed(layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        record(new_size);
        self.inner.realloc(ptr, layout, new_size)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        self.inner.dealloc(ptr, layout);
    }
}

/// Counters for the current thread.
pub fn thread_stats() -> AllocStats {
    AllocStats {
        allocations: THREAD_ALLOCATIONS.try_with(Cell::get).unwrap_or(0),
        bytes: THREAD_BYTES.try_with(Cell::get).unwrap_or(0),
    }
}

/// Process-wide counters.
pub fn process_stats() -> AllocStats {
    AllocStats {
        allocations: PROCESS_ALLOCATIONS.load(Ordering::Relaxed),
        bytes: PROCESS_BYTES.load(Ordering::Relaxed),
    }
}

/// Runs `f` and returns its result plus the current thread's counter delta.
pub fn measure<R>(f: impl FnOnce() -> R) -> (R, AllocStats) {
    let before = thread_stats();
    let out = f();
    (out, thread_stats() - before)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_deltas_subtract_fieldwise() {
        let before = AllocStats {
            allocations: 2,
            bytes: 128,
        };
        let after = AllocStats {
            allocations: 5,
            bytes: 512,
        };
        assert_eq!(
            after - before,
            AllocStats {
                allocations: 3,
                bytes: 384,
            }
        );
    }

    // Counter movement is exercised in tests/alloc_count.rs, which installs
    // the wrapper as its binary's global allocator.
    #[test]
    fn measure_passes_the_closure_result_through() {
        let (out, _stats) = measure(|| 41 + 1);
        assert_eq!(out, 42);
    }
}
