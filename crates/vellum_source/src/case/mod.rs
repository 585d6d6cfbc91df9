//! Case policy for identifier comparison.

use std::borrow::Cow;

/// How identifier text is compared against a keyword.
///
/// Stylesheet keywords are ASCII case-insensitive, which is the default.
/// Non-ASCII characters are always compared exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CasePolicy {
    /// Byte-for-byte comparison.
    Sensitive,
    /// ASCII letters compare equal regardless of case.
    #[default]
    AsciiInsensitive,
}

impl CasePolicy {
    /// Compare two identifiers under this policy.
    #[inline]
    pub fn matches(self, a: &str, b: &str) -> bool {
        match self {
            CasePolicy::Sensitive => a == b,
            CasePolicy::AsciiInsensitive => a.eq_ignore_ascii_case(b),
        }
    }

    /// Fold an identifier to its canonical form under this policy.
    ///
    /// Two identifiers are equal under the policy iff their folded forms are
    /// byte-equal. Borrows when folding would not change the text.
    pub fn fold(self, text: &str) -> Cow<'_, str> {
        match self {
            CasePolicy::AsciiInsensitive if text.bytes().any(|b| b.is_ascii_uppercase()) => {
                Cow::Owned(text.to_ascii_lowercase())
            }
            CasePolicy::Sensitive | CasePolicy::AsciiInsensitive => Cow::Borrowed(text),
        }
    }
}
