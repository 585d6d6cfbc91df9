//! Composite values produced by repetition, periodic and list combinators.

use smallvec::SmallVec;
use std::fmt;

fn join<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T], separator: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// An ordered, whitespace-separated run of values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TupleValue<T>(SmallVec<[T; 4]>);

impl<T> TupleValue<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0.into_vec()
    }
}

impl<T> From<SmallVec<[T; 4]>> for TupleValue<T> {
    fn from(items: SmallVec<[T; 4]>) -> Self {
        TupleValue(items)
    }
}

impl<T> FromIterator<T> for TupleValue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        TupleValue(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a TupleValue<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: fmt::Display> fmt::Display for TupleValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        join(f, &self.0, " ")
    }
}

/// Slot a missing periodic slot copies from, given `supplied` leading slots.
///
/// A missing slot mirrors the slot two before it; slot 1 falls back to
/// slot 0. For four slots this is the box-edge shorthand rule:
///
/// | supplied | slots |
/// |----------|-------|
/// | `a` | `a a a a` |
/// | `a b` | `a b a b` |
/// | `a b c` | `a b c b` |
/// | `a b c d` | `a b c d` |
///
/// Requires `supplied >= 1`.
fn mirror_slot(mut slot: usize, supplied: usize) -> usize {
    debug_assert!(supplied > 0, "mirror_slot needs at least one supplied slot");
    while slot >= supplied {
        slot = if slot >= 2 { slot - 2 } else { 0 };
    }
    slot
}

/// A fixed-arity value filled from a shorter written form.
///
/// `N` is the arity the consumer needs (4 for box edges: top, right,
/// bottom, left). Between 1 and `N` values may be written; the rest are
/// filled by mirroring (see [`PeriodicValue::expand`]).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PeriodicValue<T, const N: usize>([T; N]);

impl<T, const N: usize> PeriodicValue<T, N> {
    pub fn new(slots: [T; N]) -> Self {
        PeriodicValue(slots)
    }

    /// Fill all `N` slots from the written values.
    ///
    /// Returns `None` when nothing or more than `N` values were written.
    pub fn expand(supplied: &[T]) -> Option<Self>
    where
        T: Clone,
    {
        if supplied.is_empty() || supplied.len() > N {
            return None;
        }
        Some(PeriodicValue(std::array::from_fn(|slot| {
            supplied[mirror_slot(slot, supplied.len())].clone()
        })))
    }

    pub fn slots(&self) -> &[T; N] {
        &self.0
    }

    pub fn into_slots(self) -> [T; N] {
        self.0
    }

    /// The fewest leading slots that [`expand`](Self::expand) back to all
    /// slots: `1px 2px 1px 2px` shortens to `1px 2px`.
    ///
    /// Only safe to write out where nothing follows the value, since a
    /// shortened value does not mark where it ends.
    pub fn shortest(&self) -> &[T]
    where
        T: PartialEq,
    {
        let written = (1..N)
            .find(|&written| (0..N).all(|slot| self.0[slot] == self.0[mirror_slot(slot, written)]))
            .unwrap_or(N);
        &self.0[..written]
    }
}

impl<T> PeriodicValue<T, 4> {
    pub fn top(&self) -> &T {
        &self.0[0]
    }

    pub fn right(&self) -> &T {
        &self.0[1]
    }

    pub fn bottom(&self) -> &T {
        &self.0[2]
    }

    pub fn left(&self) -> &T {
        &self.0[3]
    }
}

/// Renders every slot, so the text reads back as exactly one value even
/// when other values follow it.
impl<T: fmt::Display, const N: usize> fmt::Display for PeriodicValue<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        join(f, &self.0, " ")
    }
}

/// A separator-delimited sequence of values, in source order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListValue<T> {
    items: Vec<T>,
    separator: u8,
}

impl<T> ListValue<T> {
    pub fn new(items: Vec<T>, separator: u8) -> Self {
        ListValue { items, separator }
    }

    /// A comma-separated list.
    pub fn comma(items: Vec<T>) -> Self {
        ListValue::new(items, b',')
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn separator(&self) -> u8 {
        self.separator
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Commas render as `", "`; other separators are spaced on both sides.
impl<T: fmt::Display> fmt::Display for ListValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.separator == b',' {
            join(f, &self.items, ", ")
        } else {
            let separator = format!(" {} ", char::from(self.separator));
            join(f, &self.items, &separator)
        }
    }
}
