//! Periodic (shorthand-expanding) repetition.

use smallvec::SmallVec;
use tracing::trace;
use vellum_source::Source;
use vellum_values::PeriodicValue;

use super::gather;
use crate::Converter;

/// Arity of box-edge shorthands: top, right, bottom, left.
pub const BOX_EDGES: usize = 4;

/// Reads one to `N` whitespace-separated values and expands them to
/// exactly `N` slots.
///
/// How many values were written is decoupled from how many the consumer
/// needs: missing slots are filled by the mirroring rule documented on
/// [`PeriodicValue::expand`]. Fails, restoring the cursor, if no value is
/// present. Stops after `N` values; anything after is left unconsumed.
#[derive(Clone, Copy, Debug)]
pub struct Periodic<C, const N: usize> {
    inner: C,
}

impl<C, const N: usize> Periodic<C, N> {
    pub fn new(inner: C) -> Self {
        const { assert!(N > 0, "periodic arity must be at least 1") };
        Periodic { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C, const N: usize> Converter for Periodic<C, N>
where
    C: Converter,
    C::Output: Clone,
{
    type Output = PeriodicValue<C::Output, N>;

    fn attempt(&self, source: &mut Source<'_>) -> Option<Self::Output> {
        let start = source.position();
        let mut supplied: SmallVec<[C::Output; N]> = SmallVec::new();
        gather(&self.inner, source, N, &mut supplied);

        let value = PeriodicValue::expand(&supplied);
        if value.is_none() {
            trace!(position = start, arity = N, "periodic value absent");
            source.rewind(start);
        }
        value
    }
}
