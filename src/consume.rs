//! Non-inlined consumers for the parameter-passing probes.
//!
//! Each consumer takes one aggregate and returns its field sum. The
//! `#[inline(never)]` is the point: with the call inlined, the optimizer
//! would collapse a probe over a fixed fixture into a constant and there
//! would be no parameter passing left to measure. `sum` itself stays
//! `#[inline(always)]`, so the body cost is identical across shapes and the
//! measured difference is storage and calling convention alone.
//!
//! None of these functions allocate.

use crate::point::{HeapPoint, KeyPoint, PlainPoint, SharedPoint};

/// Consumes a heap aggregate through a shared reference (one pointer passed).
#[inline(never)]
pub fn heap_by_ref(p: &HeapPoint) -> i32 {
    p.sum()
}

/// Consumes an inline aggregate by value (all 64 bytes copied into the call).
#[inline(never)]
pub fn plain_by_value(p: PlainPoint) -> i32 {
    p.sum()
}

/// Consumes an inline aggregate through a shared reference.
#[inline(never)]
pub fn plain_by_ref(p: &PlainPoint) -> i32 {
    p.sum()
}

/// Consumes a shared heap aggregate through a shared reference.
#[inline(never)]
pub fn shared_by_ref(p: &SharedPoint) -> i32 {
    p.sum()
}

/// Consumes a keyed inline aggregate by value.
#[inline(never)]
pub fn key_by_value(p: KeyPoint) -> i32 {
    p.sum()
}

/// Consumes a keyed inline aggregate through a shared reference.
#[inline(never)]
pub fn key_by_ref(p: &KeyPoint) -> i32 {
    p.sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::{Fixture, SEED_SUM};

    #[test]
    fn consumers_return_the_field_sum() {
        let fx = Fixture::new();
        assert_eq!(heap_by_ref(&fx.heap), SEED_SUM);
        assert_eq!(plain_by_value(fx.plain), SEED_SUM);
        assert_eq!(plain_by_ref(&fx.plain), SEED_SUM);
        assert_eq!(shared_by_ref(&fx.shared), SEED_SUM);
        assert_eq!(key_by_value(fx.key), SEED_SUM);
        assert_eq!(key_by_ref(&fx.key), SEED_SUM);
    }
}
