//! Whole-text conversion.
//!
//! Converters only recognize a value at the cursor. The entry points here
//! run one over a complete property value: leading and trailing
//! insignificant content is ignored, and anything left over after the value
//! means the text is not that value.

use tracing::trace;
use vellum_source::Source;
use vellum_values::{PropertyValue, INHERIT_KEYWORD};

use crate::Converter;

/// Convert all of `text` with `converter`.
///
/// Returns `None` if the converter does not match, or if significant
/// content remains after the value it produced.
pub fn convert_standalone<C>(converter: &C, text: &str) -> Option<C::Output>
where
    C: Converter + ?Sized,
{
    let mut source = Source::new(text);
    source.skip_insignificant();
    let value = converter.attempt(&mut source)?;
    source.skip_insignificant();
    if !source.is_at_end() {
        trace!(
            len = text.len(),
            unconsumed = source.position(),
            "value followed by unconsumed input"
        );
        return None;
    }
    Some(value)
}

/// Convert all of `text` as a property value: either the `inherit` keyword
/// or a value of the converter's type.
///
/// `inherit` only counts when it is the whole value, matched without regard
/// to ASCII case. In any other case the converter runs from the start, so a
/// grammar may still accept an identifier that merely begins with
/// `inherit`.
pub fn convert_as_property_value<C>(converter: &C, text: &str) -> Option<PropertyValue<C::Output>>
where
    C: Converter + ?Sized,
{
    let mut source = Source::new(text);
    source.skip_insignificant();
    let start = source.position();

    if source.matches_identifier(INHERIT_KEYWORD) {
        source.skip_insignificant();
        if source.is_at_end() {
            return Some(PropertyValue::Inherit);
        }
        source.rewind(start);
    }

    let value = converter.attempt(&mut source)?;
    source.skip_insignificant();
    if !source.is_at_end() {
        trace!(
            len = text.len(),
            unconsumed = source.position(),
            "property value followed by unconsumed input"
        );
        return None;
    }
    Some(PropertyValue::Specified(value))
}
