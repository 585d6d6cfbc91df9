use super::*;
use pretty_assertions::assert_eq;

#[test]
fn number_display_is_shortest() {
    assert_eq!(Number(1.0).to_string(), "1");
    assert_eq!(Number(-0.5).to_string(), "-0.5");
    assert_eq!(Number(1e3).to_string(), "1000");
}

#[test]
fn integer_display() {
    assert_eq!(Integer(-12).to_string(), "-12");
}

#[test]
fn percentage_display() {
    assert_eq!(Percentage(50.0).to_string(), "50%");
    assert_eq!(Percentage(12.5).to_string(), "12.5%");
}

#[test]
fn identifier_display_keeps_case() {
    let ident = Identifier::new("Helvetica");
    assert_eq!(ident.as_str(), "Helvetica");
    assert_eq!(ident.to_string(), "Helvetica");
}

#[test]
fn length_display() {
    assert_eq!(Length::px(10.0).to_string(), "10px");
    assert_eq!(Length::new(1.5, LengthUnit::Rem).to_string(), "1.5rem");
    assert_eq!(Length::zero().to_string(), "0px");
}

#[test]
fn unit_lookup_ignores_ascii_case() {
    assert_eq!(LengthUnit::from_name("PX"), Some(LengthUnit::Px));
    assert_eq!(LengthUnit::from_name("vMin"), Some(LengthUnit::Vmin));
    assert_eq!(LengthUnit::from_name("pxx"), None);
    assert_eq!(LengthUnit::from_name(""), None);
}

#[test]
fn every_unit_name_round_trips() {
    for unit in LengthUnit::all() {
        assert_eq!(LengthUnit::from_name(unit.as_str()), Some(unit));
    }
}
