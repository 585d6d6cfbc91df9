//! Converter combinators for property-value text.
//!
//! A property value such as `margin: 1px 2px` or
//! `font-family: Helvetica, sans-serif` is text that must become a typed
//! value. This crate describes value grammars as composed converters:
//!
//! - leaf converters in [`leaf`] recognize one token (a length, a number,
//!   an identifier);
//! - combinators turn an element converter into a converter for repeated,
//!   periodic (box-edge), separated-list, keyword or optional values;
//! - [`convert_standalone`] and [`convert_as_property_value`] run a
//!   converter over a complete value, the latter also accepting `inherit`.
//!
//! Recognition failure is `None`; [`GrammarError`] only reports grammars
//! that were put together wrong.
//!
//! # Usage
//!
//! ```
//! use vellum_convert::leaf::length;
//! use vellum_convert::ConverterExt;
//! use vellum_values::{Length, PropertyValue};
//!
//! let margin = length().periodic();
//!
//! let Some(PropertyValue::Specified(edges)) = margin.convert_property("1px 2px") else {
//!     panic!("a two-value margin");
//! };
//! assert_eq!(edges.left(), &Length::px(2.0));
//! assert_eq!(edges.to_string(), "1px 2px 1px 2px");
//! assert_eq!(edges.shortest(), &[Length::px(1.0), Length::px(2.0)]);
//!
//! assert_eq!(margin.convert_property("inherit"), Some(PropertyValue::Inherit));
//! assert_eq!(margin.convert("1px 2px 3px 4px 5px"), None);
//! ```
//!
//! # Tracing
//!
//! Conversions emit `trace!` events when a combinator rejects a partial
//! match. They cost nothing unless a subscriber enables the `TRACE` level
//! for this crate.

mod combinator;
mod converter;
mod entry;
mod error;
pub mod leaf;

pub use combinator::{
    keywords, Bounds, Keywords, Labeled, List, Optional, OptionalOr, Periodic, Repeat, BOX_EDGES,
};
pub use converter::{from_fn, BoxedConverter, Converter, ConverterExt, FromFn};
pub use entry::{convert_as_property_value, convert_standalone};
pub use error::GrammarError;

// Converters are immutable once built and shared across threads.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Repeat<leaf::LengthConverter>>();
    assert_send_sync::<Periodic<leaf::LengthConverter, BOX_EDGES>>();
    assert_send_sync::<List<leaf::IdentifierConverter>>();
    assert_send_sync::<Keywords<u8>>();
    assert_send_sync::<GrammarError>();
};
