//! Parameter-passing probe aggregates.
//!
//! Four structurally identical aggregates of sixteen `i32` fields (64 bytes
//! of payload), differing only in storage and equality semantics:
//!
//! - [`HeapPoint`]: heap-allocated through [`Box`], mutable fields, no
//!   derived equality (identity is the box itself).
//! - [`PlainPoint`]: inline `Copy` value, mutable fields.
//! - [`SharedPoint`]: heap-allocated through [`Rc`], shared ownership,
//!   immutable, structural equality.
//! - [`KeyPoint`]: inline `Copy` value, immutable, structural equality and
//!   hashing (usable as a map key).
//!
//! All four hold the same field values for a given input array, so the field
//! sum is numerically identical across shapes. The only benchmark-visible
//! difference is how the aggregate travels into a consumer: behind a
//! pointer, or as a full 64-byte copy.

use std::rc::Rc;

/// The fixed deterministic input sequence `1..=16` for the passing probes.
pub const SEED_FIELDS: [i32; 16] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];

/// `SEED_FIELDS` summed: `1 + 2 + ... + 16`.
pub const SEED_SUM: i32 = 136;

/// Heap-allocated aggregate with mutable fields and identity semantics.
#[derive(Debug, Clone)]
pub struct HeapPoint {
    pub a01: i32,
    pub a02: i32,
    pub a03: i32,
    pub a04: i32,
    pub a05: i32,
    pub a06: i32,
    pub a07: i32,
    pub a08: i32,
    pub a09: i32,
    pub a10: i32,
    pub a11: i32,
    pub a12: i32,
    pub a13: i32,
    pub a14: i32,
    pub a15: i32,
    pub a16: i32,
}

impl HeapPoint {
    /// Builds the aggregate from sixteen fields.
    pub fn from_fields(v: &[i32; 16]) -> Self {
        Self {
            a01: v[0],
            a02: v[1],
            a03: v[2],
            a04: v[3],
            a05: v[4],
            a06: v[5],
            a07: v[6],
            a08: v[7],
            a09: v[8],
            a10: v[9],
            a11: v[10],
            a12: v[11],
            a13: v[12],
            a14: v[13],
            a15: v[14],
            a16: v[15],
        }
    }

    /// Builds directly into the heap storage this shape is measured in.
    pub fn boxed(v: &[i32; 16]) -> Box<Self> {
        Box::new(Self::from_fields(v))
    }

    /// Sum of all sixteen fields.
    #[inline(always)]
    pub fn sum(&self) -> i32 {
        self.a01
            + self.a02
            + self.a03
            + self.a04
            + self.a05
            + self.a06
            + self.a07
            + self.a08
            + self.a09
            + self.a10
            + self.a11
            + self.a12
            + self.a13
            + self.a14
            + self.a15
            + self.a16
    }
}

/// Inline `Copy` aggregate with mutable fields.
///
/// Passing this by value moves all 64 bytes through the call; passing it by
/// reference moves one pointer. Both conventions have a consumer in
/// [`crate::consume`].
#[derive(Debug, Clone, Copy)]
pub struct PlainPoint {
    pub a01: i32,
    pub a02: i32,
    pub a03: i32,
    pub a04: i32,
    pub a05: i32,
    pub a06: i32,
    pub a07: i32,
    pub a08: i32,
    pub a09: i32,
    pub a10: i32,
    pub a11: i32,
    pub a12: i32,
    pub a13: i32,
    pub a14: i32,
    pub a15: i32,
    pub a16: i32,
}

impl PlainPoint {
    /// Builds the aggregate from sixteen fields.
    pub fn from_fields(v: &[i32; 16]) -> Self {
        Self {
            a01: v[0],
            a02: v[1],
            a03: v[2],
            a04: v[3],
            a05: v[4],
            a06: v[5],
            a07: v[6],
            a08: v[7],
            a09: v[8],
            a10: v[9],
            a11: v[10],
            a12: v[11],
            a13: v[12],
            a14: v[13],
            a15: v[14],
            a16: v[15],
        }
    }

    /// Sum of all sixteen fields.
    #[inline(always)]
    pub fn sum(&self) -> i32 {
        self.a01
            + self.a02
            + self.a03
            + self.a04
            + self.a05
            + self.a06
            + self.a07
            + self.a08
            + self.a09
            + self.a10
            + self.a11
            + self.a12
            + self.a13
            + self.a14
            + self.a15
            + self.a16
    }
}

/// Heap-allocated, shared-ownership aggregate with structural equality.
///
/// Fields are private and set only at construction; two `SharedPoint`s
/// compare equal exactly when all sixteen fields match, regardless of which
/// `Rc` cell holds them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SharedPoint {
    a01: i32,
    a02: i32,
    a03: i32,
    a04: i32,
    a05: i32,
    a06: i32,
    a07: i32,
    a08: i32,
    a09: i32,
    a10: i32,
    a11: i32,
    a12: i32,
    a13: i32,
    a14: i32,
    a15: i32,
    a16: i32,
}

impl SharedPoint {
    /// Builds the aggregate from sixteen fields.
    pub fn from_fields(v: &[i32; 16]) -> Self {
        Self {
            a01: v[0],
            a02: v[1],
            a03: v[2],
            a04: v[3],
            a05: v[4],
            a06: v[5],
            a07: v[6],
            a08: v[7],
            a09: v[8],
            a10: v[9],
            a11: v[10],
            a12: v[11],
            a13: v[12],
            a14: v[13],
            a15: v[14],
            a16: v[15],
        }
    }

    /// Builds directly into the shared heap storage this shape is measured in.
    pub fn shared(v: &[i32; 16]) -> Rc<Self> {
        Rc::new(Self::from_fields(v))
    }

    /// Sum of all sixteen fields.
    #[inline(always)]
    pub fn sum(&self) -> i32 {
        self.a01
            + self.a02
            + self.a03
            + self.a04
            + self.a05
            + self.a06
            + self.a07
            + self.a08
            + self.a09
            + self.a10
            + self.a11
            + self.a12
            + self.a13
            + self.a14
            + self.a15
            + self.a16
    }
}

/// Inline `Copy` aggregate with structural equality and hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPoint {
    a01: i32,
    a02: i32,
    a03: i32,
    a04: i32,
    a05: i32,
    a06: i32,
    a07: i32,
    a08: i32,
    a09: i32,
    a10: i32,
    a11: i32,
    a12: i32,
    a13: i32,
    a14: i32,
    a15: i32,
    a16: i32,
}

impl KeyPoint {
    /// Builds the aggregate from sixteen fields.
    pub fn from_fields(v: &[i32; 16]) -> Self {
        Self {
            a01: v[0],
            a02: v[1],
            a03: v[2],
            a04: v[3],
            a05: v[4],
            a06: v[5],
            a07: v[6],
            a08: v[7],
            a09: v[8],
            a10: v[9],
            a11: v[10],
            a12: v[11],
            a13: v[12],
            a14: v[13],
            a15: v[14],
            a16: v[15],
        }
    }

    /// Sum of all sixteen fields.
    #[inline(always)]
    pub fn sum(&self) -> i32 {
        self.a01
            + self.a02
            + self.a03
            + self.a04
            + self.a05
            + self.a06
            + self.a07
            + self.a08
            + self.a09
            + self.a10
            + self.a11
            + self.a12
            + self.a13
            + self.a14
            + self.a15
            + self.a16
    }
}

/// Pre-built instances of every shape, constructed once from [`SEED_FIELDS`].
///
/// The passing probes measure the call, not construction: building the
/// fixture outside the timed region keeps allocation out of the measurement
/// entirely. One fixture lives for the whole benchmark run.
pub struct Fixture {
    pub heap: Box<HeapPoint>,
    pub plain: PlainPoint,
    pub shared: Rc<SharedPoint>,
    pub key: KeyPoint,
}

impl Fixture {
    /// Builds every shape from [`SEED_FIELDS`].
    pub fn new() -> Self {
        Self {
            heap: HeapPoint::boxed(&SEED_FIELDS),
            plain: PlainPoint::from_fields(&SEED_FIELDS),
            shared: SharedPoint::shared(&SEED_FIELDS),
            key: KeyPoint::from_fields(&SEED_FIELDS),
        }
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_sums_the_seed_sequence_to_136() {
        let fx = Fixture::new();
        assert_eq!(fx.heap.sum(), SEED_SUM);
        assert_eq!(fx.plain.sum(), SEED_SUM);
        assert_eq!(fx.shared.sum(), SEED_SUM);
        assert_eq!(fx.key.sum(), SEED_SUM);
    }

    #[test]
    fn seed_sum_matches_the_sequence() {
        assert_eq!(SEED_FIELDS.iter().sum::<i32>(), SEED_SUM);
    }

    #[test]
    fn shared_points_compare_by_fields_not_by_cell() {
        let a = SharedPoint::shared(&SEED_FIELDS);
        let b = SharedPoint::shared(&SEED_FIELDS);
        assert!(!Rc::ptr_eq(&a, &b));
        assert_eq!(a, b);
    }
}
