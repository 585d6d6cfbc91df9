//! Optional terms, with or without an explicit default.

use vellum_source::Source;

use crate::Converter;

/// Makes a term optional; the absent case is `None`.
///
/// Never fails. When the inner converter does not match, the cursor is left
/// where it was.
#[derive(Clone, Copy, Debug)]
pub struct Optional<C> {
    inner: C,
}

impl<C> Optional<C> {
    pub fn new(inner: C) -> Self {
        Optional { inner }
    }
}

impl<C: Converter> Converter for Optional<C> {
    type Output = Option<C::Output>;

    fn attempt(&self, source: &mut Source<'_>) -> Option<Self::Output> {
        let mark = source.position();
        let value = self.inner.attempt(source);
        if value.is_none() {
            source.rewind(mark);
        }
        Some(value)
    }
}

/// Makes a term optional, standing in `default` when it is absent.
///
/// Never fails. The default is the term's semantic default, so callers do
/// not special-case the gap.
#[derive(Clone, Copy, Debug)]
pub struct OptionalOr<C, T> {
    inner: C,
    default: T,
}

impl<C, T> OptionalOr<C, T> {
    pub fn new(inner: C, default: T) -> Self {
        OptionalOr { inner, default }
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }
}

impl<C, T> Converter for OptionalOr<C, T>
where
    C: Converter<Output = T>,
    T: Clone,
{
    type Output = T;

    fn attempt(&self, source: &mut Source<'_>) -> Option<T> {
        let mark = source.position();
        match self.inner.attempt(source) {
            Some(value) => Some(value),
            None => {
                source.rewind(mark);
                Some(self.default.clone())
            }
        }
    }
}
