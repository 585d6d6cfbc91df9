//! Property values and the `inherit` sentinel.

use std::fmt;

/// The reserved identifier that denotes inheritance for any property.
pub const INHERIT_KEYWORD: &str = "inherit";

/// The value of a property: either inherited or specified by a grammar.
///
/// `inherit` is valid for every property and is not describable by most
/// value grammars, so it lives outside `T` instead of being a variant of
/// each grammar's value type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyValue<T> {
    /// Take the value from the parent.
    Inherit,
    /// A value produced by the property's grammar.
    Specified(T),
}

impl<T> PropertyValue<T> {
    pub fn is_inherit(&self) -> bool {
        matches!(self, PropertyValue::Inherit)
    }

    pub fn specified(&self) -> Option<&T> {
        match self {
            PropertyValue::Inherit => None,
            PropertyValue::Specified(value) => Some(value),
        }
    }

    pub fn into_specified(self) -> Option<T> {
        match self {
            PropertyValue::Inherit => None,
            PropertyValue::Specified(value) => Some(value),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> PropertyValue<U> {
        match self {
            PropertyValue::Inherit => PropertyValue::Inherit,
            PropertyValue::Specified(value) => PropertyValue::Specified(f(value)),
        }
    }
}

impl<T: fmt::Display> fmt::Display for PropertyValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Inherit => f.write_str(INHERIT_KEYWORD),
            PropertyValue::Specified(value) => value.fmt(f),
        }
    }
}
