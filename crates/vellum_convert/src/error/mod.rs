//! Grammar construction errors.
//!
//! These report mistakes in how a converter was put together, and are
//! returned when the converter is built. A failed conversion is never an
//! error: it is `None`.

use thiserror::Error;

/// A combinator was configured in a way that can never behave correctly.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("repetition bounds are inverted: min {min} exceeds max {max}")]
    InvertedBounds { min: usize, max: usize },

    #[error("keyword `{0}` appears more than once")]
    DuplicateKeyword(Box<str>),

    #[error("keyword `{0}` is not a single identifier")]
    InvalidKeyword(Box<str>),

    #[error("{} cannot separate list items", describe_separator(.0))]
    InvalidSeparator(u8),
}

#[allow(
    clippy::trivially_copy_pass_by_ref,
    reason = "thiserror format arguments receive fields by reference"
)]
fn describe_separator(byte: &u8) -> String {
    let byte = *byte;
    if byte.is_ascii_graphic() {
        format!("`{}`", char::from(byte))
    } else {
        format!("byte 0x{byte:02X}")
    }
}
