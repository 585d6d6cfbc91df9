//! Source cursor for property-value text.
//!
//! This crate is the positional reader that value converters run against.
//! It knows how to skip insignificant content (whitespace and comments),
//! how to recognize identifier and number tokens, and how to test whether
//! all input has been consumed. It knows nothing about values or grammars.
//!
//! # Usage
//!
//! ```
//! use vellum_source::Source;
//!
//! let mut source = Source::new("  /* note */ auto");
//! source.skip_insignificant();
//! assert!(source.matches_identifier("AUTO"));
//! assert!(source.is_at_end());
//! ```

mod case;
mod source;

pub use case::CasePolicy;
pub use source::{identifier_len, is_identifier, number_len, Source};
