//! Single-token converters for the common value types.
//!
//! A number token directly followed by an identifier is a dimension and a
//! number followed by `%` is a percentage, so each converter checks what
//! follows the number and only accepts its own token shape.

use vellum_source::Source;
use vellum_values::{Identifier, Integer, Length, LengthUnit, Number, Percentage};

use crate::Converter;

/// Returns `true` if the number just read is followed by a unit or `%`.
#[inline]
fn continues_as_dimension(source: &Source<'_>) -> bool {
    source.at_identifier() || source.current() == b'%'
}

/// Unitless number. See [`number`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NumberConverter;

impl Converter for NumberConverter {
    type Output = Number;

    fn attempt(&self, source: &mut Source<'_>) -> Option<Number> {
        let start = source.position();
        let value = source.eat_number()?;
        if continues_as_dimension(source) {
            source.rewind(start);
            return None;
        }
        Some(Number(value))
    }
}

/// A plain number such as `1`, `-0.5` or `1e3`.
pub fn number() -> NumberConverter {
    NumberConverter
}

/// Whole number. See [`integer`].
#[derive(Clone, Copy, Debug, Default)]
pub struct IntegerConverter;

impl Converter for IntegerConverter {
    type Output = Integer;

    fn attempt(&self, source: &mut Source<'_>) -> Option<Integer> {
        let text = source.peek_number()?;
        if text.contains(['.', 'e', 'E']) {
            return None;
        }
        let value: i32 = text.parse().ok()?;
        let start = source.position();
        source.advance_n(text.len());
        if continues_as_dimension(source) {
            source.rewind(start);
            return None;
        }
        Some(Integer(value))
    }
}

/// A number without fraction or exponent that fits in `i32`.
pub fn integer() -> IntegerConverter {
    IntegerConverter
}

/// Length with unit. See [`length`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LengthConverter;

impl Converter for LengthConverter {
    type Output = Length;

    #[allow(clippy::float_cmp, reason = "only an exact zero may omit its unit")]
    fn attempt(&self, source: &mut Source<'_>) -> Option<Length> {
        let start = source.position();
        let value = source.eat_number()?;

        if let Some(name) = source.peek_identifier() {
            if let Some(unit) = LengthUnit::from_name(name) {
                source.advance_n(name.len());
                return Some(Length::new(value, unit));
            }
        } else if value == 0.0 && source.current() != b'%' {
            return Some(Length::zero());
        }

        source.rewind(start);
        None
    }
}

/// A number immediately followed by a length unit, or a unitless `0`.
pub fn length() -> LengthConverter {
    LengthConverter
}

/// Percentage. See [`percentage`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PercentageConverter;

impl Converter for PercentageConverter {
    type Output = Percentage;

    fn attempt(&self, source: &mut Source<'_>) -> Option<Percentage> {
        let start = source.position();
        let value = source.eat_number()?;
        if source.eat_byte(b'%') {
            return Some(Percentage(value));
        }
        source.rewind(start);
        None
    }
}

/// A number immediately followed by `%`.
pub fn percentage() -> PercentageConverter {
    PercentageConverter
}

/// Any identifier. See [`identifier`].
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentifierConverter;

impl Converter for IdentifierConverter {
    type Output = Identifier;

    fn attempt(&self, source: &mut Source<'_>) -> Option<Identifier> {
        source.eat_identifier().map(Identifier::new)
    }
}

/// Any identifier, kept as written.
pub fn identifier() -> IdentifierConverter {
    IdentifierConverter
}

#[cfg(test)]
mod tests;
