use super::*;
use crate::ConverterExt;
use pretty_assertions::assert_eq;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Sizing {
    None,
    Auto,
}

fn sizing(policy: CasePolicy) -> Keywords<Sizing> {
    match Keywords::new(policy, [("none", Sizing::None), ("auto", Sizing::Auto)]) {
        Ok(keywords) => keywords,
        Err(error) => panic!("valid mapping rejected: {error}"),
    }
}

#[test]
fn matching_keyword_is_consumed() {
    let mut source = Source::new("auto;");
    assert_eq!(
        sizing(CasePolicy::AsciiInsensitive).attempt(&mut source),
        Some(Sizing::Auto)
    );
    assert_eq!(source.rest(), ";");
}

#[test]
fn longer_identifier_does_not_match() {
    let mut source = Source::new("autos");
    assert_eq!(sizing(CasePolicy::AsciiInsensitive).attempt(&mut source), None);
    assert_eq!(source.position(), 0);
}

#[test]
fn non_identifier_does_not_match() {
    let mut source = Source::new("10px");
    assert_eq!(sizing(CasePolicy::AsciiInsensitive).attempt(&mut source), None);
    assert_eq!(source.position(), 0);
}

#[test]
fn insensitive_policy_matches_any_ascii_case() {
    assert_eq!(
        sizing(CasePolicy::AsciiInsensitive).convert("AUTO"),
        Some(Sizing::Auto)
    );
    assert_eq!(
        sizing(CasePolicy::AsciiInsensitive).convert("NoNe"),
        Some(Sizing::None)
    );
}

#[test]
fn sensitive_policy_matches_exact_case() {
    assert_eq!(sizing(CasePolicy::Sensitive).convert("AUTO"), None);
    assert_eq!(sizing(CasePolicy::Sensitive).convert("auto"), Some(Sizing::Auto));
}

#[test]
fn keys_are_folded_at_construction() {
    let Ok(mapping) = keywords([("Auto", 1)]) else {
        panic!("single identifier key is valid");
    };
    assert_eq!(mapping.names().collect::<Vec<_>>(), vec!["auto"]);
    assert_eq!(mapping.get("AUTO"), Some(&1));
    assert_eq!(mapping.policy(), CasePolicy::AsciiInsensitive);
}

#[test]
fn duplicate_keys_are_rejected() {
    assert_eq!(
        keywords([("auto", 1), ("auto", 2)]).map(|k| k.len()),
        Err(GrammarError::DuplicateKeyword("auto".into()))
    );
}

#[test]
fn duplicates_after_folding_are_rejected() {
    assert_eq!(
        keywords([("auto", 1), ("AUTO", 2)]).map(|k| k.len()),
        Err(GrammarError::DuplicateKeyword("AUTO".into()))
    );
    assert!(Keywords::new(CasePolicy::Sensitive, [("auto", 1), ("AUTO", 2)]).is_ok());
}

#[test]
fn non_identifier_keys_are_rejected() {
    for key in ["", "1px", "two words", "#fff"] {
        assert_eq!(
            keywords([(key, 0)]).map(|k| k.len()),
            Err(GrammarError::InvalidKeyword(key.into()))
        );
    }
}

#[test]
fn empty_mapping_never_matches() {
    let Ok(mapping) = keywords(Vec::<(&str, u8)>::new()) else {
        panic!("empty mapping is valid");
    };
    assert!(mapping.is_empty());
    assert_eq!(mapping.convert("auto"), None);
}

#[test]
fn owned_string_keys() {
    let entries = vec![("thin".to_owned(), 1), ("thick".to_owned(), 5)];
    let Ok(widths) = keywords(entries) else {
        panic!("owned keys are valid");
    };
    assert_eq!(widths.convert("thick"), Some(5));
}
