use super::*;
use crate::ConverterExt;
use pretty_assertions::assert_eq;

// === Number ===

#[test]
fn number_forms() {
    assert_eq!(number().convert("1"), Some(Number(1.0)));
    assert_eq!(number().convert("-0.5"), Some(Number(-0.5)));
    assert_eq!(number().convert("+.25"), Some(Number(0.25)));
    assert_eq!(number().convert("1e3"), Some(Number(1000.0)));
}

#[test]
fn number_rejects_dimensions_without_consuming() {
    for text in ["10px", "10%", "1e3em", "2-x"] {
        let mut source = Source::new(text);
        assert_eq!(number().attempt(&mut source), None, "{text:?}");
        assert_eq!(source.position(), 0, "{text:?}");
    }
}

// === Integer ===

#[test]
fn integer_forms() {
    assert_eq!(integer().convert("42"), Some(Integer(42)));
    assert_eq!(integer().convert("-7"), Some(Integer(-7)));
    assert_eq!(integer().convert("+3"), Some(Integer(3)));
}

#[test]
fn integer_rejects_fractions_and_overflow() {
    assert_eq!(integer().convert("1.5"), None);
    assert_eq!(integer().convert("1e2"), None);
    assert_eq!(integer().convert("99999999999"), None);
}

#[test]
fn integer_rejects_dimension() {
    let mut source = Source::new("3px");
    assert_eq!(integer().attempt(&mut source), None);
    assert_eq!(source.position(), 0);
}

// === Length ===

#[test]
fn length_with_units() {
    assert_eq!(length().convert("10px"), Some(Length::px(10.0)));
    assert_eq!(
        length().convert("1.5REM"),
        Some(Length::new(1.5, LengthUnit::Rem))
    );
    assert_eq!(
        length().convert("-2vmin"),
        Some(Length::new(-2.0, LengthUnit::Vmin))
    );
}

#[test]
fn unit_directly_after_exponent() {
    assert_eq!(length().convert("1e1px"), Some(Length::px(10.0)));
    assert_eq!(length().convert("2em"), Some(Length::new(2.0, LengthUnit::Em)));
}

#[test]
fn unitless_zero_is_a_length() {
    assert_eq!(length().convert("0"), Some(Length::zero()));
    assert_eq!(length().convert("0.0"), Some(Length::zero()));
}

#[test]
fn length_rejects_other_shapes() {
    for text in ["5", "10%", "10deg", "px", "0%", "10 px"] {
        assert_eq!(length().convert(text), None, "{text:?}");
    }
}

#[test]
fn length_restores_cursor_on_unknown_unit() {
    let mut source = Source::new("10deg");
    assert_eq!(length().attempt(&mut source), None);
    assert_eq!(source.position(), 0);
}

// === Percentage ===

#[test]
fn percentage_forms() {
    assert_eq!(percentage().convert("50%"), Some(Percentage(50.0)));
    assert_eq!(percentage().convert("-12.5%"), Some(Percentage(-12.5)));
}

#[test]
fn percentage_needs_adjacent_sign() {
    let mut source = Source::new("50 %");
    assert_eq!(percentage().attempt(&mut source), None);
    assert_eq!(source.position(), 0);
}

// === Identifier ===

#[test]
fn identifier_kept_as_written() {
    assert_eq!(
        identifier().convert("  Helvetica  "),
        Some(Identifier::new("Helvetica"))
    );
    assert_eq!(identifier().convert("--accent"), Some(Identifier::new("--accent")));
    assert_eq!(identifier().convert("10px"), None);
}

// === Round Trip ===

#[test]
fn rendered_leaves_reparse_equal() {
    let lengths = ["10px", "0", "-1.25em", "3e2vw", ".5in"];
    for text in lengths {
        let Some(value) = length().convert(text) else {
            panic!("{text:?} is a length");
        };
        assert_eq!(length().convert(&value.to_string()), Some(value), "{text:?}");
    }
    let Some(n) = number().convert("0.1") else {
        panic!("0.1 is a number");
    };
    assert_eq!(number().convert(&n.to_string()), Some(n));
}
