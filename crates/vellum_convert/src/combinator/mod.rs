//! Combinators: converters built from other converters.
//!
//! | Builder | Combinator | Output | Fails when |
//! |---------|------------|--------|------------|
//! | `many()`, `repeated(min, max)` | [`Repeat`] | `TupleValue<T>` | fewer than `min` values |
//! | `periodic()`, `periodic_of::<N>()` | [`Periodic`] | `PeriodicValue<T, N>` | no value |
//! | `list()`, `list_separated_by(b)` | [`List`] | `ListValue<T>` | no first value |
//! | [`keywords`] | [`Keywords`] | `T` | identifier not in the mapping |
//! | `optional()` | [`Optional`] | `Option<T>` | never |
//! | `optional_or(d)` | [`OptionalOr`] | `T` | never |
//! | `labeled(labels)` | [`Labeled`] | `T` | whenever the inner converter fails |

mod keywords;
mod labeled;
mod list;
mod optional;
mod periodic;
mod repeat;

pub use keywords::{keywords, Keywords};
pub use labeled::Labeled;
pub use list::List;
pub use optional::{Optional, OptionalOr};
pub use periodic::{Periodic, BOX_EDGES};
pub use repeat::{Bounds, Repeat};

use smallvec::{Array, SmallVec};
use vellum_source::Source;

use crate::Converter;

/// Collect up to `limit` values from `inner`, separated by insignificant
/// content.
///
/// Stops at the first failure, at `limit`, or after a value that consumed
/// no input. The cursor is left right after the last collected value, or
/// where it started if nothing was collected.
fn gather<C, A>(inner: &C, source: &mut Source<'_>, limit: usize, items: &mut SmallVec<A>)
where
    C: Converter + ?Sized,
    A: Array<Item = C::Output>,
{
    let mut end = source.position();
    while items.len() < limit {
        if !items.is_empty() {
            source.skip_insignificant();
        }
        let before = source.position();
        let Some(value) = inner.attempt(source) else {
            break;
        };
        items.push(value);
        end = source.position();
        if end == before {
            break;
        }
    }
    source.rewind(end);
}
