use super::*;
use crate::leaf::integer;
use crate::{from_fn, ConverterExt};
use pretty_assertions::assert_eq;
use vellum_values::Integer;

fn ints(values: &[i32]) -> Vec<Integer> {
    values.iter().copied().map(Integer).collect()
}

fn two_to_four() -> Repeat<crate::leaf::IntegerConverter> {
    match integer().repeated(2, 4) {
        Ok(repeat) => repeat,
        Err(error) => panic!("valid bounds rejected: {error}"),
    }
}

// === Bounds ===

#[test]
fn bounds_reject_inverted() {
    assert_eq!(
        Bounds::new(3, 2),
        Err(GrammarError::InvertedBounds { min: 3, max: 2 })
    );
}

#[test]
fn bounds_accept_equal_and_zero() {
    assert!(Bounds::new(2, 2).is_ok());
    assert!(Bounds::new(0, 0).is_ok());
}

#[test]
fn bounds_defaults() {
    assert_eq!(Bounds::default(), Bounds::ONE_OR_MORE);
    assert_eq!(Bounds::ONE_OR_MORE.min(), 1);
    assert_eq!(Bounds::ONE_OR_MORE.max(), 65_535);
    assert_eq!(Bounds::ZERO_OR_MORE.min(), 0);
}

#[test]
fn bounds_at_least_never_inverts() {
    let bounds = Bounds::at_least(70_000);
    assert_eq!((bounds.min(), bounds.max()), (70_000, 70_000));
    assert!(Bounds::at_least(3).contains(3));
    assert!(!Bounds::at_least(3).contains(2));
}

#[test]
fn repeated_propagates_bounds_error() {
    assert!(integer().repeated(5, 1).is_err());
}

// === Conversion ===

#[test]
fn within_bounds_succeeds() {
    let mut source = Source::new("1 2 3");
    let value = two_to_four().attempt(&mut source);
    assert_eq!(value.map(TupleValue::into_vec), Some(ints(&[1, 2, 3])));
    assert!(source.is_at_end());
}

#[test]
fn below_min_fails_and_restores() {
    let mut source = Source::new("1 x");
    assert_eq!(two_to_four().attempt(&mut source), None);
    assert_eq!(source.position(), 0);
}

#[test]
fn stops_at_max_leaving_remainder() {
    let mut source = Source::new("1 2 3 4 5 6");
    let value = two_to_four().attempt(&mut source);
    assert_eq!(value.map(TupleValue::into_vec), Some(ints(&[1, 2, 3, 4])));
    assert_eq!(source.rest(), " 5 6");
}

#[test]
fn standalone_rejects_leftover_beyond_max() {
    assert_eq!(two_to_four().convert("1 2 3 4 5 6"), None);
    assert!(two_to_four().convert("1 2 3 4").is_some());
}

#[test]
fn trailing_whitespace_is_not_consumed() {
    let mut source = Source::new("1 2  ;");
    assert!(two_to_four().attempt(&mut source).is_some());
    assert_eq!(source.rest(), "  ;");
}

#[test]
fn comments_separate_items() {
    let value = integer().many().convert("1/* a */2");
    assert_eq!(value.map(TupleValue::into_vec), Some(ints(&[1, 2])));
}

#[test]
fn zero_min_succeeds_empty() {
    let repeat = Repeat::new(integer(), Bounds::ZERO_OR_MORE);
    let mut source = Source::new("auto");
    let value = repeat.attempt(&mut source);
    assert_eq!(value.map(|tuple| tuple.len()), Some(0));
    assert_eq!(source.position(), 0);
}

#[test]
fn many_requires_one() {
    let mut source = Source::new("");
    assert_eq!(integer().many().attempt(&mut source), None);
}

#[test]
fn empty_match_ends_repetition() {
    let nothing = from_fn(|_: &mut Source<'_>| Some(0_u8));
    let value = nothing.many().convert("");
    assert_eq!(value.map(|tuple| tuple.len()), Some(1));
}

#[test]
fn display_joins_with_space() {
    let value = integer().many().convert(" 1   2\t3 ");
    assert_eq!(value.map(|tuple| tuple.to_string()), Some("1 2 3".to_owned()));
}
