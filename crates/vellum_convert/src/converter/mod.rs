//! The converter contract and the builder surface for combinators.
//!
//! A [`Converter`] looks at the cursor and either produces one value or
//! reports that no value is recognized here. Recognition failure is an
//! ordinary outcome used to try alternatives, so it is `None`, never an
//! error.
//!
//! # Cursor discipline
//!
//! - Success: the cursor sits right after the text that produced the value.
//! - Failure: the cursor is where it was before the attempt.
//!
//! Every converter in this crate keeps both rules, so a caller can try
//! sibling converters from the same position without taking a snapshot.

use std::fmt;
use std::sync::Arc;

use vellum_source::Source;
use vellum_values::PropertyValue;

use crate::combinator::{
    Bounds, Labeled, List, Optional, OptionalOr, Periodic, Repeat, BOX_EDGES,
};
use crate::entry::{convert_as_property_value, convert_standalone};
use crate::GrammarError;

/// Recognizes one typed value at the cursor.
///
/// Converters hold only immutable configuration, so a single converter can
/// serve any number of conversions, from any number of threads.
pub trait Converter {
    /// The value produced on success.
    type Output;

    /// Try to recognize a value at the cursor.
    fn attempt(&self, source: &mut Source<'_>) -> Option<Self::Output>;
}

impl<C: Converter + ?Sized> Converter for &C {
    type Output = C::Output;

    #[inline]
    fn attempt(&self, source: &mut Source<'_>) -> Option<Self::Output> {
        (**self).attempt(source)
    }
}

impl<C: Converter + ?Sized> Converter for Box<C> {
    type Output = C::Output;

    #[inline]
    fn attempt(&self, source: &mut Source<'_>) -> Option<Self::Output> {
        (**self).attempt(source)
    }
}

impl<C: Converter + ?Sized> Converter for Arc<C> {
    type Output = C::Output;

    #[inline]
    fn attempt(&self, source: &mut Source<'_>) -> Option<Self::Output> {
        (**self).attempt(source)
    }
}

/// A type-erased converter that can be stored in grammar tables and shared
/// across threads.
pub type BoxedConverter<T> = Box<dyn Converter<Output = T> + Send + Sync>;

/// A converter backed by a closure. Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FromFn")
    }
}

impl<F, T> Converter for FromFn<F>
where
    F: Fn(&mut Source<'_>) -> Option<T>,
{
    type Output = T;

    #[inline]
    fn attempt(&self, source: &mut Source<'_>) -> Option<T> {
        (self.0)(source)
    }
}

/// Build a leaf converter from a closure.
///
/// The closure must follow the cursor discipline: on `None`, leave the
/// cursor where it found it.
pub fn from_fn<F, T>(f: F) -> FromFn<F>
where
    F: Fn(&mut Source<'_>) -> Option<T>,
{
    FromFn(f)
}

/// Combinator builders and entry points as methods on every converter.
///
/// Each builder consumes the receiver and returns a new converter; nothing
/// is mutated, so built grammars can be shared freely.
pub trait ConverterExt: Converter + Sized {
    /// One or more values, whitespace separated.
    fn many(self) -> Repeat<Self> {
        Repeat::new(self, Bounds::ONE_OR_MORE)
    }

    /// Between `min` and `max` values, whitespace separated.
    fn repeated(self, min: usize, max: usize) -> Result<Repeat<Self>, GrammarError> {
        Ok(Repeat::new(self, Bounds::new(min, max)?))
    }

    /// One to four values expanded to box edges (top, right, bottom, left).
    fn periodic(self) -> Periodic<Self, BOX_EDGES> {
        Periodic::new(self)
    }

    /// One to `N` values expanded to `N` slots.
    fn periodic_of<const N: usize>(self) -> Periodic<Self, N> {
        Periodic::new(self)
    }

    /// One or more comma-separated values.
    fn list(self) -> List<Self> {
        List::comma(self)
    }

    /// One or more values separated by `separator`.
    fn list_separated_by(self, separator: u8) -> Result<List<Self>, GrammarError> {
        List::separated_by(self, separator)
    }

    /// The value if present, `None` otherwise. Never fails.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// The value if present, `default` otherwise. Never fails.
    fn optional_or(self, default: Self::Output) -> OptionalOr<Self, Self::Output>
    where
        Self::Output: Clone,
    {
        OptionalOr::new(self, default)
    }

    /// Attach descriptive labels; conversion is unchanged.
    fn labeled(self, labels: &'static [&'static str]) -> Labeled<Self> {
        Labeled::new(self, labels)
    }

    /// Erase the converter's type.
    fn boxed(self) -> BoxedConverter<Self::Output>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }

    /// See [`convert_standalone`].
    fn convert(&self, text: &str) -> Option<Self::Output> {
        convert_standalone(self, text)
    }

    /// See [`convert_as_property_value`].
    fn convert_property(&self, text: &str) -> Option<PropertyValue<Self::Output>> {
        convert_as_property_value(self, text)
    }
}

impl<C: Converter> ConverterExt for C {}
