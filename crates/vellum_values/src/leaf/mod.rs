//! Leaf values produced by single-token converters.

use std::fmt;

/// A unitless number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number(pub f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A whole number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Integer(pub i32);

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A percentage, stored as written (`50%` is `Percentage(50.0)`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Percentage(pub f64);

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// An identifier, kept exactly as written.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier(pub Box<str>);

impl Identifier {
    pub fn new(name: impl Into<Box<str>>) -> Self {
        Identifier(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Units accepted for a [`Length`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Px,
    Em,
    Rem,
    Ex,
    Ch,
    Vw,
    Vh,
    Vmin,
    Vmax,
    Cm,
    Mm,
    Q,
    In,
    Pt,
    Pc,
}

impl LengthUnit {
    const ALL: [LengthUnit; 15] = [
        LengthUnit::Px,
        LengthUnit::Em,
        LengthUnit::Rem,
        LengthUnit::Ex,
        LengthUnit::Ch,
        LengthUnit::Vw,
        LengthUnit::Vh,
        LengthUnit::Vmin,
        LengthUnit::Vmax,
        LengthUnit::Cm,
        LengthUnit::Mm,
        LengthUnit::Q,
        LengthUnit::In,
        LengthUnit::Pt,
        LengthUnit::Pc,
    ];

    /// Canonical (lowercase) unit name.
    pub const fn as_str(self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Em => "em",
            LengthUnit::Rem => "rem",
            LengthUnit::Ex => "ex",
            LengthUnit::Ch => "ch",
            LengthUnit::Vw => "vw",
            LengthUnit::Vh => "vh",
            LengthUnit::Vmin => "vmin",
            LengthUnit::Vmax => "vmax",
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::Q => "q",
            LengthUnit::In => "in",
            LengthUnit::Pt => "pt",
            LengthUnit::Pc => "pc",
        }
    }

    /// Look up a unit by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(name))
    }

    /// All units, in declaration order.
    pub fn all() -> impl Iterator<Item = LengthUnit> {
        Self::ALL.into_iter()
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A distance: a number with a unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Length { value, unit }
    }

    pub const fn px(value: f64) -> Self {
        Length::new(value, LengthUnit::Px)
    }

    /// The length a unitless `0` denotes.
    pub const fn zero() -> Self {
        Length::px(0.0)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests;
