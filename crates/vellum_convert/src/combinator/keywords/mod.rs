//! Keyword-to-value lookup.

use rustc_hash::{FxBuildHasher, FxHashMap};
use vellum_source::{is_identifier, CasePolicy, Source};

use crate::{Converter, GrammarError};

/// Maps identifier keywords to constant values.
///
/// Reads one whole identifier token; if it is a key (under the case policy
/// fixed at construction) the mapped value is returned, otherwise nothing is
/// consumed. Because the whole token is compared, `autos` never matches
/// `auto`.
#[derive(Clone, Debug)]
pub struct Keywords<T> {
    /// Keys are stored folded under `policy`.
    map: FxHashMap<Box<str>, T>,
    policy: CasePolicy,
}

impl<T> Keywords<T> {
    /// Build a mapping from `(keyword, value)` pairs.
    ///
    /// Every keyword must be a single identifier token, and no two keywords
    /// may be equal under `policy`.
    pub fn new<I, K>(policy: CasePolicy, entries: I) -> Result<Self, GrammarError>
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
    {
        let entries = entries.into_iter();
        let mut map = FxHashMap::with_capacity_and_hasher(entries.size_hint().0, FxBuildHasher);
        for (keyword, value) in entries {
            let keyword = keyword.as_ref();
            if !is_identifier(keyword) {
                return Err(GrammarError::InvalidKeyword(keyword.into()));
            }
            let folded: Box<str> = policy.fold(keyword).into();
            if map.insert(folded, value).is_some() {
                return Err(GrammarError::DuplicateKeyword(keyword.into()));
            }
        }
        Ok(Keywords { map, policy })
    }

    pub fn policy(&self) -> CasePolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The value `identifier` maps to, if any.
    pub fn get(&self, identifier: &str) -> Option<&T> {
        self.map.get(&*self.policy.fold(identifier))
    }

    /// Stored keywords, folded under the policy, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(|key| &**key)
    }
}

impl<T: Clone> Converter for Keywords<T> {
    type Output = T;

    fn attempt(&self, source: &mut Source<'_>) -> Option<T> {
        let mark = source.position();
        let identifier = source.eat_identifier()?;
        if let Some(value) = self.get(identifier) {
            return Some(value.clone());
        }
        source.rewind(mark);
        None
    }
}

/// A keyword mapping with stylesheet (ASCII case-insensitive) matching.
pub fn keywords<I, K, T>(entries: I) -> Result<Keywords<T>, GrammarError>
where
    I: IntoIterator<Item = (K, T)>,
    K: AsRef<str>,
{
    Keywords::new(CasePolicy::AsciiInsensitive, entries)
}

#[cfg(test)]
mod tests;
