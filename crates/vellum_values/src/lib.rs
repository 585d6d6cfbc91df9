//! Typed property values.
//!
//! Every value renders itself as property text through [`std::fmt::Display`],
//! and rendering then re-reading a value yields an equal value.
//!
//! - Leaf values: [`Number`], [`Integer`], [`Length`], [`Percentage`],
//!   [`Identifier`]
//! - Composite values built by combinators: [`TupleValue`],
//!   [`PeriodicValue`], [`ListValue`]
//! - [`PropertyValue`]: a specified value or the `inherit` sentinel

mod composite;
mod leaf;
mod property;

pub use composite::{ListValue, PeriodicValue, TupleValue};
pub use leaf::{Identifier, Integer, Length, LengthUnit, Number, Percentage};
pub use property::{PropertyValue, INHERIT_KEYWORD};
