//! Bounded repetition.

use smallvec::SmallVec;
use tracing::trace;
use vellum_source::Source;
use vellum_values::TupleValue;

use super::gather;
use crate::{Converter, GrammarError};

/// How many values a [`Repeat`] accepts.
///
/// Invariant: `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    min: usize,
    max: usize,
}

impl Bounds {
    /// Upper bound used when a grammar sets none (`u16::MAX`).
    pub const DEFAULT_MAX: usize = 65_535;

    /// `1..=DEFAULT_MAX`.
    pub const ONE_OR_MORE: Bounds = Bounds {
        min: 1,
        max: Self::DEFAULT_MAX,
    };

    /// `0..=DEFAULT_MAX`.
    pub const ZERO_OR_MORE: Bounds = Bounds {
        min: 0,
        max: Self::DEFAULT_MAX,
    };

    /// Bounds accepting `min..=max` values.
    pub fn new(min: usize, max: usize) -> Result<Self, GrammarError> {
        if min > max {
            return Err(GrammarError::InvertedBounds { min, max });
        }
        Ok(Bounds { min, max })
    }

    /// At least `min` values, up to [`DEFAULT_MAX`](Self::DEFAULT_MAX) (or
    /// `min`, if larger).
    pub fn at_least(min: usize) -> Self {
        Bounds {
            min,
            max: Self::DEFAULT_MAX.max(min),
        }
    }

    #[inline]
    pub fn min(self) -> usize {
        self.min
    }

    #[inline]
    pub fn max(self) -> usize {
        self.max
    }

    #[inline]
    pub fn contains(self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::ONE_OR_MORE
    }
}

/// Whitespace-separated repetition of one converter.
///
/// Greedy but bounded: takes values until the inner converter fails or
/// `max` values are collected, then succeeds if at least `min` were found.
/// With `min == 0` it always succeeds, possibly with an empty tuple. On
/// failure the cursor is restored to where the repetition started.
#[derive(Clone, Copy, Debug)]
pub struct Repeat<C> {
    inner: C,
    bounds: Bounds,
}

impl<C> Repeat<C> {
    pub fn new(inner: C, bounds: Bounds) -> Self {
        Repeat { inner, bounds }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Converter> Converter for Repeat<C> {
    type Output = TupleValue<C::Output>;

    fn attempt(&self, source: &mut Source<'_>) -> Option<Self::Output> {
        let start = source.position();
        let mut items: SmallVec<[C::Output; 4]> = SmallVec::new();
        gather(&self.inner, source, self.bounds.max, &mut items);

        if items.len() < self.bounds.min {
            trace!(
                position = start,
                count = items.len(),
                min = self.bounds.min,
                "repetition below minimum"
            );
            source.rewind(start);
            return None;
        }
        Some(TupleValue::from(items))
    }
}

#[cfg(test)]
mod tests;
