//! Separator-delimited lists.

use tracing::trace;
use vellum_source::Source;
use vellum_values::ListValue;

use crate::{Converter, GrammarError};

/// Returns `true` if `byte` can delimit list items without being read as
/// part of an identifier, number or percentage.
fn is_separator(byte: u8) -> bool {
    byte.is_ascii_punctuation() && !matches!(byte, b'-' | b'_' | b'+' | b'.' | b'%' | b'\\')
}

/// One or more values separated by a fixed byte, in source order.
///
/// Insignificant content is allowed around the separator. The list ends at
/// the first separator that is not followed by a value; that separator is
/// left unconsumed.
#[derive(Clone, Copy, Debug)]
pub struct List<C> {
    inner: C,
    separator: u8,
}

impl<C> List<C> {
    /// A comma-separated list.
    pub fn comma(inner: C) -> Self {
        List {
            inner,
            separator: b',',
        }
    }

    /// A list delimited by `separator`, which must be ASCII punctuation that
    /// cannot start or continue a value token.
    pub fn separated_by(inner: C, separator: u8) -> Result<Self, GrammarError> {
        if !is_separator(separator) {
            return Err(GrammarError::InvalidSeparator(separator));
        }
        Ok(List { inner, separator })
    }

    pub fn separator(&self) -> u8 {
        self.separator
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Converter> Converter for List<C> {
    type Output = ListValue<C::Output>;

    fn attempt(&self, source: &mut Source<'_>) -> Option<Self::Output> {
        let start = source.position();
        let Some(first) = self.inner.attempt(source) else {
            source.rewind(start);
            return None;
        };

        let mut items = vec![first];
        loop {
            let mark = source.position();
            source.skip_insignificant();
            if !source.eat_byte(self.separator) {
                source.rewind(mark);
                break;
            }
            source.skip_insignificant();
            match self.inner.attempt(source) {
                Some(item) => items.push(item),
                None => {
                    trace!(
                        position = mark,
                        separator = %char::from(self.separator),
                        "list separator without item"
                    );
                    source.rewind(mark);
                    break;
                }
            }
        }
        Some(ListValue::new(items, self.separator))
    }
}
